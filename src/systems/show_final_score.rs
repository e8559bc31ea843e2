use bevy::prelude::*;

use crate::{
    score::ScoreKeeper,
    FinalScoreText,
    GameOverEvent,
};

// The misspelling and the double space are the message the game has always
// shipped with; changing the wording is a product call, not a code fix.
pub fn final_score_message(score: u32) -> String {
    format!("Congragulation!\n You got a score of  {score}%")
}

pub fn show_final_score(
    mut ev_game_over: EventReader<GameOverEvent>,
    score_keeper: Option<Res<ScoreKeeper>>,
    mut final_score_text: Query<&mut Text, With<FinalScoreText>>,
) {
    if ev_game_over.is_empty() {
        return;
    }
    ev_game_over.clear();
    let Some(score_keeper) = score_keeper else {
        error!("show_final_score: no ScoreKeeper resource, leaving final score text unchanged");
        return;
    };
    let Ok(mut final_score_text) = final_score_text.get_single_mut() else {
        error!("show_final_score: no final score text element to write to");
        return;
    };
    final_score_text.sections[0].value = final_score_message(score_keeper.calculate_score());
}
