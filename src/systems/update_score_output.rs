use bevy::prelude::*;

use crate::{
    score::ScoreKeeper,
    ScoreOutput,
};

pub fn update_score_output(
    mut score_text: Query<&mut Text, With<ScoreOutput>>,
    score_keeper: Res<ScoreKeeper>,
) {
    let mut score_text = score_text.single_mut();
    score_text.sections[0].value = format!("Score: {0}%", score_keeper.calculate_score());
}
