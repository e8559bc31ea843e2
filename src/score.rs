use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct ScoreKeeper {
    correct_answers: u32,
    questions_seen: u32,
}

impl ScoreKeeper {
    pub fn increment_correct_answers(&mut self) {
        self.correct_answers += 1;
    }

    pub fn increment_questions_seen(&mut self) {
        self.questions_seen += 1;
    }

    // percentage of questions answered correctly, rounded to the nearest
    // whole number; a fresh tally scores 0 rather than dividing by zero
    pub fn calculate_score(&self) -> u32 {
        if self.questions_seen == 0 {
            return 0;
        }
        (self.correct_answers as f32 / self.questions_seen as f32 * 100.).round() as u32
    }

    pub fn reset(&mut self) {
        self.correct_answers = 0;
        self.questions_seen = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(correct: u32, seen: u32) -> ScoreKeeper {
        let mut score_keeper = ScoreKeeper::default();
        for n in 0..seen {
            score_keeper.increment_questions_seen();
            if n < correct {
                score_keeper.increment_correct_answers();
            }
        }
        score_keeper
    }

    #[test]
    fn fresh_tally_scores_zero() {
        assert_eq!(ScoreKeeper::default().calculate_score(), 0);
    }

    #[test]
    fn rounds_to_nearest_percent() {
        assert_eq!(tally(1, 3).calculate_score(), 33);
        assert_eq!(tally(2, 3).calculate_score(), 67);
        assert_eq!(tally(1, 2).calculate_score(), 50);
    }

    #[test]
    fn perfect_tally_scores_one_hundred() {
        assert_eq!(tally(4, 4).calculate_score(), 100);
    }

    #[test]
    fn reset_clears_the_tally() {
        let mut score_keeper = tally(3, 4);
        score_keeper.reset();
        assert_eq!(score_keeper.calculate_score(), 0);
    }
}
