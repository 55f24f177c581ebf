//! Quiz questions

/// One multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options` of the right answer
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    pub fn correct_answer(&self) -> &'static str {
        self.options[self.correct_index]
    }
}

/// The built-in Independence Day quiz
pub const QUESTIONS: [QuizQuestion; 4] = [
    QuizQuestion {
        prompt: "When did Pakistan gain independence?",
        options: ["23 March 1940", "14 August 1947", "15 August 1947", "27th Ramadan 1366 AH"],
        correct_index: 1,
    },
    QuizQuestion {
        prompt: "Who was the first Governor-General of Pakistan?",
        options: [
            "Liaquat Ali Khan",
            "Khawaja Nazimuddin",
            "Quaid-e-Azam Muhammad Ali Jinnah",
            "Allama Iqbal",
        ],
        correct_index: 2,
    },
    QuizQuestion {
        prompt: "What is the national slogan of Pakistan?",
        options: [
            "Pakistan Painda Bad!",
            "Pakistan Zindabad!",
            "Jeeway Pakistan!",
            "Quaid-e-Azam Zindabad!",
        ],
        correct_index: 1,
    },
    QuizQuestion {
        prompt: "What are the two colors of Pakistan’s national flag?",
        options: ["Green and White", "Green and Black", "Blue and White", "Golden and Green"],
        correct_index: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_answers_in_range() {
        for q in QUESTIONS.iter() {
            assert!(q.correct_index < q.options.len(), "{}", q.prompt);
        }
    }

    #[test]
    fn test_correct_answer() {
        assert_eq!(QUESTIONS[0].correct_answer(), "14 August 1947");
        assert!(QUESTIONS[3].is_correct(0));
        assert!(!QUESTIONS[3].is_correct(1));
    }
}
