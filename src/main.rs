use actix::Actor;
use miette::WrapErr;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_scramble::actors::SessionActor;
use word_scramble::session::Session;
use word_scramble::validation::{DictionaryValidator, SpellChecker, WordList};
use word_scramble::{config, shell};

#[actix_rt::main]
async fn main() -> miette::Result<()> {
    // Set up logging on stderr so it stays out of the game output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting word scramble");

    // Load configuration
    let config = config::load_config()?;

    let dictionary = DictionaryValidator::new(&config.dictionary_path, &config.dictionary_locale)
        .wrap_err("could not start a new game")?;

    let word_list = match &config.word_list_path {
        Some(path) => WordList::from_file(path),
        None => WordList::embedded(),
    }
    .wrap_err("could not start a new game")?;

    let spell_checker: Box<dyn SpellChecker> = Box::new(dictionary);
    let session = match config.seed {
        Some(seed) => Session::with_seed(spell_checker, &config.dictionary_locale, seed),
        None => Session::new(spell_checker, &config.dictionary_locale),
    };

    let addr = SessionActor::new(session, word_list).start();

    tokio::select! {
        result = shell::run(addr, shell::spawn_stdin_reader()) => result,
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal, leaving the game");
            Ok(())
        }
    }
}
