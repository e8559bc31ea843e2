mod spawn_score_output;
pub use spawn_score_output::spawn_score_output;

mod update_score_output;
pub use update_score_output::update_score_output;

mod spawn_quiz_ui;
pub use spawn_quiz_ui::spawn_quiz_ui;

mod update_question_text;
pub use update_question_text::update_question_text;

mod answer_selected;
pub use answer_selected::answer_selected;

mod handle_answer;
pub use handle_answer::handle_answer;

mod spawn_end_screen;
pub use spawn_end_screen::spawn_end_screen;

mod show_end_screen;
pub use show_end_screen::show_end_screen;

mod show_final_score;
pub use show_final_score::show_final_score;

mod restart;
pub use restart::restart;

mod on_restart_clicked;
pub use on_restart_clicked::on_restart_clicked;

mod on_quit_clicked;
pub use on_quit_clicked::on_quit_clicked;
