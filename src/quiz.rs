use bevy::prelude::*;

use rand::seq::SliceRandom;

pub struct Question {
    pub prompt: &'static str,
    pub answer: bool,
}

pub const QUESTION_BANK: &[Question] = &[
    Question {
        prompt: "The Great Wall of China is visible to the naked eye from low Earth orbit.",
        answer: false,
    },
    Question {
        prompt: "Octopuses have three hearts.",
        answer: true,
    },
    Question {
        prompt: "Sound travels faster in water than in air.",
        answer: true,
    },
    Question {
        prompt: "Lightning never strikes the same place twice.",
        answer: false,
    },
    Question {
        prompt: "Venus is the hottest planet in the solar system.",
        answer: true,
    },
    Question {
        prompt: "Goldfish have a memory span of only three seconds.",
        answer: false,
    },
    Question {
        prompt: "Honey kept sealed can stay edible for thousands of years.",
        answer: true,
    },
    Question {
        prompt: "A tomato is botanically a vegetable.",
        answer: false,
    },
];

// play order over QUESTION_BANK plus a cursor into it
#[derive(Resource)]
pub struct Quiz {
    deck: Vec<usize>,
    current: usize,
}

impl Quiz {
    pub fn shuffled() -> Self {
        let mut deck: Vec<usize> = (0..QUESTION_BANK.len()).collect();
        deck.shuffle(&mut rand::thread_rng());
        Self { deck, current: 0 }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.deck.get(self.current).map(|&index| &QUESTION_BANK[index])
    }

    // move to the next question, reporting whether one is left to show
    pub fn advance(&mut self) -> bool {
        self.current += 1;
        self.current < self.deck.len()
    }

    pub fn restart(&mut self) {
        self.deck.shuffle(&mut rand::thread_rng());
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_every_question_exactly_once() {
        let mut quiz = Quiz::shuffled();
        let mut prompts = Vec::new();
        loop {
            prompts.push(quiz.current_question().unwrap().prompt);
            if !quiz.advance() {
                break;
            }
        }
        assert_eq!(prompts.len(), QUESTION_BANK.len());
        for question in QUESTION_BANK {
            assert!(prompts.contains(&question.prompt));
        }
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn restart_rewinds_the_deck() {
        let mut quiz = Quiz::shuffled();
        while quiz.advance() {}
        assert!(quiz.current_question().is_none());
        quiz.restart();
        assert!(quiz.current_question().is_some());
    }
}
