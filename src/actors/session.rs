use actix::{Actor, Context, Handler, Message};
use tracing::info;

use crate::error::Result;
use crate::session::{AcceptedWord, Session};
use crate::validation::{SpellChecker, WordList};

/// Message to start (or restart) a game with a fresh root word
#[derive(Message)]
#[rtype(result = "crate::error::Result<String>")]
pub struct StartSession;

/// Message to submit a word typed by the player
#[derive(Message)]
#[rtype(result = "crate::error::Result<AcceptedWord>")]
pub struct SubmitCandidate {
    pub raw: String,
}

/// Message to get the accepted words, most recent first
#[derive(Message)]
#[rtype(result = "Vec<String>")]
pub struct GetHistory;

/// Message to get the current root word
#[derive(Message)]
#[rtype(result = "Option<String>")]
pub struct GetRootWord;

/// Actor that owns the game session.
///
/// Every mutation goes through its mailbox, so the session is only ever
/// touched from the actor's own event loop.
pub struct SessionActor {
    session: Session<Box<dyn SpellChecker>>,
    word_list: WordList,
}

impl SessionActor {
    pub fn new(session: Session<Box<dyn SpellChecker>>, word_list: WordList) -> Self {
        Self { session, word_list }
    }
}

impl Actor for SessionActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        info!(
            "SessionActor started with {} root words",
            self.word_list.words().len()
        );
    }
}

impl Handler<StartSession> for SessionActor {
    type Result = Result<String>;

    fn handle(&mut self, _msg: StartSession, _ctx: &mut Context<Self>) -> Self::Result {
        self.session
            .start_with(&self.word_list)
            .map(str::to_string)
    }
}

impl Handler<SubmitCandidate> for SessionActor {
    type Result = Result<AcceptedWord>;

    fn handle(&mut self, msg: SubmitCandidate, _ctx: &mut Context<Self>) -> Self::Result {
        self.session.submit_candidate(&msg.raw)
    }
}

impl Handler<GetHistory> for SessionActor {
    type Result = Vec<String>;

    fn handle(&mut self, _msg: GetHistory, _ctx: &mut Context<Self>) -> Self::Result {
        self.session.history().to_vec()
    }
}

impl Handler<GetRootWord> for SessionActor {
    type Result = Option<String>;

    fn handle(&mut self, _msg: GetRootWord, _ctx: &mut Context<Self>) -> Self::Result {
        self.session.root_word().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RejectionReason, SessionError};
    use crate::session::DEFAULT_LOCALE;
    use crate::validation::DictionaryValidator;

    fn start_actor() -> actix::Addr<SessionActor> {
        let dictionary = DictionaryValidator::from_words(["silk", "worm"], DEFAULT_LOCALE).unwrap();
        let spell_checker: Box<dyn SpellChecker> = Box::new(dictionary);
        let session = Session::with_seed(spell_checker, DEFAULT_LOCALE, 5);
        let word_list = WordList::parse("silkworm").unwrap();

        SessionActor::new(session, word_list).start()
    }

    #[actix_rt::test]
    async fn test_submit_before_start() {
        let addr = start_actor();

        let result = addr
            .send(SubmitCandidate {
                raw: "silk".to_string(),
            })
            .await
            .unwrap();
        assert!(matches!(result, Err(Error::Session(SessionError::NotStarted))));
        assert_eq!(addr.send(GetRootWord).await.unwrap(), None);
    }

    #[actix_rt::test]
    async fn test_session_round_trip() {
        let addr = start_actor();

        let root = addr.send(StartSession).await.unwrap().unwrap();
        assert_eq!(root, "silkworm");
        assert_eq!(addr.send(GetRootWord).await.unwrap(), Some(root));

        for word in ["silk", "worm"] {
            let accepted = addr
                .send(SubmitCandidate {
                    raw: word.to_string(),
                })
                .await
                .unwrap()
                .unwrap();
            assert_eq!(accepted.word, word);
        }

        let repeat = addr
            .send(SubmitCandidate {
                raw: "Silk".to_string(),
            })
            .await
            .unwrap();
        assert!(matches!(
            repeat,
            Err(Error::Rejected(RejectionReason::Duplicate(_)))
        ));

        assert_eq!(addr.send(GetHistory).await.unwrap(), ["worm", "silk"]);

        // Restart clears the history
        addr.send(StartSession).await.unwrap().unwrap();
        assert!(addr.send(GetHistory).await.unwrap().is_empty());
    }
}
