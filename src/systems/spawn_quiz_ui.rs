use bevy::prelude::*;

use crate::{
    quiz::Quiz,
    AnswerButton,
    QuestionText,
    PRIMARY_FONT,
};

pub fn spawn_quiz_ui(
    mut commands: Commands,
    quiz: Res<Quiz>,
    asset_server: Res<AssetServer>,
) {
    let prompt = quiz
        .current_question()
        .map(|question| question.prompt)
        .unwrap_or_default();
    commands.spawn(NodeBundle {
        style: Style {
            width: Val::Percent(100.),
            height: Val::Percent(100.),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        ..default()
    }).with_children(|parent| {
        parent.spawn((
            TextBundle::from_section(
                prompt,
                TextStyle {
                    font: asset_server.load(PRIMARY_FONT),
                    font_size: 40.0,
                    color: Color::WHITE,
                },
            ).with_style(Style {
                max_width: Val::Px(700.),
                margin: UiRect::bottom(Val::Px(40.)),
                ..default()
            }),
            QuestionText,
            Label, // a11y tag
        ));
        parent.spawn(NodeBundle {
            style: Style {
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                column_gap: Val::Px(30.),
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
            for (label, value) in [("True", true), ("False", false)] {
                parent.spawn(
                    (button.clone(), AnswerButton(value))
                ).with_children(|parent| {
                    parent.spawn(TextBundle::from_section(
                            label,
                            TextStyle {
                                font: asset_server.load(PRIMARY_FONT),
                                font_size: 30.0,
                                color: Color::rgb(0.9, 0.9, 0.9),
                            },
                    ));
                });
            }
        });
    });
}
