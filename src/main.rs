use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use judgewheel::{
    config::EngineConfig,
    state::{parse_player_names, GameEngine},
    types::{DrawOutcome, GuessOutcome, GuessStart},
};

fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "judgewheel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env();
    tracing::info!("Starting judgewheel autoplay with {:?}", config);

    let mut engine = match GameEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to load level table: {}", e);
            std::process::exit(1);
        }
    };

    let players = match parse_player_names(&config.players) {
        Ok(players) => players,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    engine.set_players(players);

    if let Some(description) = engine.level_description() {
        tracing::info!("Level {}: {}", engine.current_level(), description);
    }

    for _ in 0..config.turns {
        let judge = match engine.spin() {
            Ok(judge) => judge,
            Err(e) => {
                tracing::error!("Could not pick a judge: {}", e);
                break;
            }
        };

        match engine.draw_question() {
            Ok(DrawOutcome::Drawn(question)) => {
                tracing::info!("{} asks:\n{}", judge.name, question.decorated_text);
            }
            Ok(DrawOutcome::NoQuestionsLeft) => {
                tracing::info!("No questions left in the deck");
                break;
            }
            Ok(DrawOutcome::MaxTurnQuestions) => continue,
            Err(e) => {
                tracing::error!("Draw failed: {}", e);
                break;
            }
        }

        // Let the group try to guess the hidden question, always picking the first option
        if let GuessStart::Started { options, .. } = engine.start_guess_mode() {
            tracing::debug!("Guess options: {:?}", options);
            match engine.make_guess(0) {
                GuessOutcome::Judged { correct: true, .. } => {
                    tracing::info!("The group guessed the question")
                }
                GuessOutcome::Judged { .. } => tracing::info!("The group guessed wrong"),
                GuessOutcome::Locked | GuessOutcome::NotStarted => {}
            }
        }
    }

    let export = engine.export_session();
    match export.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize session: {}", e),
    }
}
