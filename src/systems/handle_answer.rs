use bevy::prelude::*;

use crate::{
    quiz::Quiz,
    score::ScoreKeeper,
    AnswerEvent,
    GameOverEvent,
};

pub fn handle_answer(
    mut quiz: ResMut<Quiz>,
    mut score_keeper: ResMut<ScoreKeeper>,
    mut ev_answer: EventReader<AnswerEvent>,
    mut ev_game_over: EventWriter<GameOverEvent>,
) {
    for AnswerEvent(answer) in ev_answer.read() {
        let Some(question) = quiz.current_question() else {
            continue;
        };
        score_keeper.increment_questions_seen();
        if *answer == question.answer {
            score_keeper.increment_correct_answers();
        }
        if !quiz.advance() {
            ev_game_over.send_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QUESTION_BANK;

    fn harness() -> App {
        let mut app = App::new();
        app.add_event::<AnswerEvent>();
        app.add_event::<GameOverEvent>();
        app.insert_resource(Quiz::shuffled());
        app.insert_resource(ScoreKeeper::default());
        app.add_systems(Update, handle_answer);
        app
    }

    #[test]
    fn perfect_run_scores_one_hundred_and_ends_the_game() {
        let mut app = harness();
        for _ in 0..QUESTION_BANK.len() {
            let answer = app
                .world
                .resource::<Quiz>()
                .current_question()
                .unwrap()
                .answer;
            app.world.send_event(AnswerEvent(answer));
            app.update();
        }
        assert_eq!(app.world.resource::<ScoreKeeper>().calculate_score(), 100);
        assert!(!app.world.resource::<Events<GameOverEvent>>().is_empty());
    }

    #[test]
    fn wrong_answers_still_count_as_seen() {
        let mut app = harness();
        for expected in [true, false] {
            let answer = app
                .world
                .resource::<Quiz>()
                .current_question()
                .unwrap()
                .answer;
            app.world.send_event(AnswerEvent(if expected { answer } else { !answer }));
            app.update();
        }
        // one right, one wrong
        assert_eq!(app.world.resource::<ScoreKeeper>().calculate_score(), 50);
        assert!(app.world.resource::<Events<GameOverEvent>>().is_empty());
    }
}
