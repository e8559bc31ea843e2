use bevy::prelude::*;

use crate::{
    EndScreen,
    FinalScoreText,
    QuitButton,
    RestartButton,
    PRIMARY_FONT,
};

pub fn spawn_end_screen(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        NodeBundle {
            style: Style {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            visibility: Visibility::Hidden,
            background_color: Color::rgba(0., 0., 0., 0.85).into(),
            ..default()
        },
        EndScreen,
    )).with_children(|parent| {
        parent.spawn(NodeBundle {
            style: Style {
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.)),
                ..default()
            },
            ..default()
        }).with_children(|parent| {
            parent.spawn((
                // filled in by show_final_score once the tally is known
                TextBundle::from_section(
                    "",
                    TextStyle {
                        font: asset_server.load(PRIMARY_FONT),
                        font_size: 48.0,
                        ..default()
                    },
                ),
                FinalScoreText,
                Label, // a11y tag
            ));
            parent.spawn(NodeBundle {
                style: Style {
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(30.),
                    margin: UiRect::top(Val::Px(30.)),
                    ..default()
                },
                ..default()
            }).with_children(|parent| {
                let button = ButtonBundle {
                    style: Style {
                        padding: UiRect::all(Val::Px(5.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    border_color: BorderColor(Color::WHITE),
                    background_color: BackgroundColor(Color::NONE),
                    ..default()
                };
                parent.spawn(
                    (button.clone(), RestartButton)
                ).with_children(|parent| {
                    parent.spawn(TextBundle::from_section(
                            "Play Again",
                            TextStyle {
                                font: asset_server.load(PRIMARY_FONT),
                                font_size: 30.0,
                                color: Color::rgb(0.9, 0.9, 0.9),
                            },
                    ));
                });
                parent.spawn(
                    (button.clone(), QuitButton)
                ).with_children(|parent| {
                    parent.spawn(TextBundle::from_section(
                            "Quit",
                            TextStyle {
                                font: asset_server.load(PRIMARY_FONT),
                                font_size: 30.0,
                                color: Color::rgb(0.9, 0.9, 0.9),
                            },
                    ));
                });
            });
        });
    });
}
