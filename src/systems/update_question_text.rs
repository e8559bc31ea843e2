use bevy::prelude::*;

use crate::{
    quiz::Quiz,
    QuestionText,
};

pub fn update_question_text(
    mut question_text: Query<&mut Text, With<QuestionText>>,
    quiz: Res<Quiz>,
) {
    let mut question_text = question_text.single_mut();
    // the deck may already be exhausted on the frame the quiz ends
    if let Some(question) = quiz.current_question() {
        question_text.sections[0].value = question.prompt.to_string();
    }
}
