use bevy::prelude::*;

use crate::{
    RestartButton,
    RestartEvent,
};

pub fn on_restart_clicked(
    mut interaction_query: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut ev_restart: EventWriter<RestartEvent>,
) {
    for interaction in &mut interaction_query {
        if let Interaction::Pressed = *interaction {
            ev_restart.send_default();
        }
    }
}
