//! Built-in question sets.

use crate::model::{QuestionDraft, QuestionSet};

fn historiography_drafts() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft::new(
            "Кто написал «Повесть временных лет»?",
            ["Монах Нестор", "Иннокентий Гизель", "Василий Татищев", "Николай Карамзин"],
            0,
            "Монах Нестор создал «Повесть временных лет» в XI веке - один из древнейших памятников русской литературы.",
        ),
        QuestionDraft::new(
            "Кто основал Российскую Академию наук?",
            ["Екатерина II", "Иван Грозный", "Петр I", "Александр I"],
            2,
            "Петр I основал Российскую Академию наук, положив начало превращению исторических знаний в науку.",
        ),
        QuestionDraft::new(
            "Сколько томов написал Карамзин в своей «Истории государства Российского»?",
            ["5 томов", "12 томов", "29 томов", "4 тома"],
            1,
            "Николай Михайлович Карамзин написал 12-томную «Историю государства Российского», которая стала одной из самых читаемых книг в России.",
        ),
        QuestionDraft::new(
            "Кто автор 29-томной «Истории России с древнейших времен»?",
            ["В.О. Ключевский", "С.М. Соловьев", "В.Н. Татищев", "Б.Д. Греков"],
            1,
            "Сергей Михайлович Соловьев создал монументальный 29-томный труд «История России с древнейших времен».",
        ),
        QuestionDraft::new(
            "В каком году начался современный этап развития российской исторической науки?",
            ["1945", "1917", "1987", "2000"],
            2,
            "С 1987 года, в период Перестройки, начался современный этап: были открыты архивы и сняты многие запреты.",
        ),
    ]
}

/// Five questions on the history of Russian historiography.
///
/// # Panics
///
/// Panics if the built-in drafts fail validation.
#[must_use]
pub fn historiography() -> QuestionSet {
    QuestionSet::from_drafts(historiography_drafts()).expect("built-in question set should be valid")
}
