use adorn::{CallbackPhase, DecorError, Decoration, DecoratorOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn keyword_lists_from_the_recognized_set_always_define(
        keys in prop::collection::vec(0..CallbackPhase::ALL.len(), 1..8),
    ) {
        let mut options = DecoratorOptions::new();
        for index in keys {
            options = options.on(CallbackPhase::ALL[index].as_str(), "hook");
        }

        prop_assert!(Decoration::new().define("generated", options).is_ok());
    }

    #[test]
    fn any_unrecognized_keyword_poisons_the_definition(
        valid in prop::collection::vec(0..CallbackPhase::ALL.len(), 0..4),
        bogus in "[a-z_]{1,24}",
    ) {
        prop_assume!(!CallbackPhase::ALL.iter().any(|phase| phase.as_str() == bogus));

        let mut options = DecoratorOptions::new();
        for index in valid {
            options = options.on(CallbackPhase::ALL[index].as_str(), "hook");
        }
        options = options.on(bogus, "hook");

        let result = Decoration::new().define("generated", options);
        let is_invalid_options = matches!(result, Err(DecorError::InvalidOptions { .. }));
        prop_assert!(is_invalid_options);
    }
}
