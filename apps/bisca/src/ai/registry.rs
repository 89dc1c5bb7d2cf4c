//! How to register an AI
//!
//! 1) Implement `AiPlayer` for the type in its module.
//! 2) Add an `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same config seed ⇒ same behavior.

use crate::ai::{AiConfig, AiEngine, AiPlayer, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer + Send>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: AiEngine::NAME,
        version: AiEngine::VERSION,
        make: make_engine,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(config: &AiConfig) -> Box<dyn AiPlayer + Send> {
    Box::new(RandomPlayer::new(config.seed()))
}

fn make_engine(config: &AiConfig) -> Box<dyn AiPlayer + Send> {
    Box::new(AiEngine::from_config(config))
}

#[cfg(test)]
mod ai_registry_smoke {
    use super::*;

    #[test]
    fn enumerates_registered_ais() {
        let ais = registered_ais();
        assert!(
            ais.iter().any(|factory| factory.name == RandomPlayer::NAME),
            "RandomPlayer factory should be present"
        );
        assert!(
            ais.iter().any(|factory| factory.name == AiEngine::NAME),
            "Engine factory should be present"
        );
    }

    #[test]
    fn constructs_players_from_config() {
        let config = AiConfig::with_seed(123);
        for factory in registered_ais() {
            let ai = (factory.make)(&config);
            assert_eq!(ai.name(), factory.name);
        }
    }

    #[test]
    fn lookup_helper_behaves() {
        assert!(by_name(RandomPlayer::NAME).is_some());
        assert!(by_name(AiEngine::NAME).is_some());
        assert!(by_name("NotARealAI").is_none());
    }
}
