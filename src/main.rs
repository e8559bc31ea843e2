#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::{
    prelude::*,
    window::PresentMode,
};

mod quiz;
mod score;
mod systems;

use quiz::Quiz;
use score::ScoreKeeper;
use systems::*;

pub const PRIMARY_FONT: &str = "fonts/FiraSans-Bold.ttf";
pub const SCORE_FONT: &str = "fonts/FiraMono-Medium.ttf";

fn main() {
    App::new()
        .add_plugins((DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Quizzical".into(),
                    present_mode: PresentMode::AutoVsync,
                    // Tells wasm to resize the window according to the available canvas
                    fit_canvas_to_parent: true,
                    // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            }),
        ))
        .insert_resource(Game { game_over: false })
        .insert_resource(ScoreKeeper::default())
        .insert_resource(Quiz::shuffled())
        .add_event::<GameOverEvent>()
        .add_event::<RestartEvent>()
        .add_event::<AnswerEvent>()
        .add_systems(
            Startup,
            (
                setup,
                spawn_score_output,
                spawn_quiz_ui,
                spawn_end_screen,
            ),
        )
        .add_systems(
            Update,
            (
                answer_selected.run_if(not(game_is_over)),
                handle_answer.run_if(not(game_is_over)),
                update_question_text.run_if(not(game_is_over)),
                update_score_output.run_if(not(game_is_over)),
                show_end_screen,
                show_final_score,
                restart.run_if(game_is_over),
                on_restart_clicked.run_if(game_is_over),
                on_quit_clicked.run_if(game_is_over),
                bevy::window::close_on_esc,
            ),
        )
        .run();
}

#[derive(Resource)]
pub struct Game {
    pub game_over: bool,
}

pub fn game_is_over(game: Res<Game>) -> bool {
    game.game_over
}

// marker for the end screen overlay and related components
#[derive(Component)]
pub struct EndScreen;

// the text element the final score message is written into
#[derive(Component)]
pub struct FinalScoreText;

#[derive(Component)]
pub struct ScoreOutput;

#[derive(Component)]
pub struct QuestionText;

// answer buttons carry the truth value they assert
#[derive(Component)]
pub struct AnswerButton(pub bool);

#[derive(Component)]
pub struct RestartButton;

#[derive(Component)]
pub struct QuitButton;

// fired when the last question has been answered; the end screen systems
// react to it on the same schedule
#[derive(Event, Default)]
pub struct GameOverEvent;

#[derive(Event, Default)]
pub struct RestartEvent;

#[derive(Event)]
pub struct AnswerEvent(pub bool);

fn setup(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
