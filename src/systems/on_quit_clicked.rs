use bevy::prelude::*;
use bevy::app::AppExit;

use crate::QuitButton;

pub fn on_quit_clicked(
    mut interaction_query: Query<&Interaction, (Changed<Interaction>, With<QuitButton>)>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    for interaction in &mut interaction_query {
        if let Interaction::Pressed = *interaction {
            app_exit_events.send_default();
        }
    }
}
