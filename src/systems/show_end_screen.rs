use bevy::prelude::*;

use crate::{
    EndScreen,
    Game,
    GameOverEvent,
};

pub fn show_end_screen(
    mut end_screen_visibility: Query<&mut Visibility, With<EndScreen>>,
    mut ev_game_over: EventReader<GameOverEvent>,
    mut game: ResMut<Game>,
) {
    if !ev_game_over.is_empty() {
        ev_game_over.clear();
        game.game_over = true;
        let mut end_screen_visibility = end_screen_visibility.single_mut();
        *end_screen_visibility = Visibility::Visible;
    }
}
