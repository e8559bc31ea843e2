use bevy::prelude::*;

use crate::{
    score::ScoreKeeper,
    ScoreOutput,
    SCORE_FONT,
};

pub fn spawn_score_output(
    mut commands: Commands,
    score_keeper: Res<ScoreKeeper>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn(NodeBundle {
        style: Style {
            margin: UiRect::all(Val::Px(15.)),
            ..default()
        },
        ..default()
    }).with_children(|parent| {
        parent.spawn((TextBundle::from_section(
            format!("Score: {0}%", score_keeper.calculate_score()),
            TextStyle {
                font: asset_server.load(SCORE_FONT),
                font_size: 32.0,
                ..default()
            },
        ), ScoreOutput));
    });
}
