use bevy::prelude::*;

use crate::{
    AnswerButton,
    AnswerEvent,
};

pub fn answer_selected(
    mut interaction_query: Query<(&Interaction, &AnswerButton), Changed<Interaction>>,
    mut ev_answer: EventWriter<AnswerEvent>,
) {
    for (interaction, AnswerButton(value)) in &mut interaction_query {
        if let Interaction::Pressed = *interaction {
            ev_answer.send(AnswerEvent(*value));
        }
    }
}
