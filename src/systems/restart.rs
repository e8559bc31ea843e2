use bevy::prelude::*;

use crate::{
    quiz::Quiz,
    score::ScoreKeeper,
    EndScreen,
    Game,
    RestartEvent,
};

pub fn restart(
    mut ev_restart: EventReader<RestartEvent>,
    mut game: ResMut<Game>,
    mut quiz: ResMut<Quiz>,
    mut score_keeper: ResMut<ScoreKeeper>,
    mut end_screen_visibility: Query<&mut Visibility, With<EndScreen>>,
) {
    if !ev_restart.is_empty() {
        ev_restart.clear();
        info!("Restarting quiz");
        game.game_over = false;
        score_keeper.reset();
        quiz.restart();
        let mut end_screen_visibility = end_screen_visibility.single_mut();
        *end_screen_visibility = Visibility::Hidden;
    }
}
