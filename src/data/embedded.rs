use crate::models::Question;

fn question(
    id: i64,
    text: &str,
    options: [&str; 4],
    correct_answer: usize,
    explanation: &str,
) -> Question {
    Question {
        id,
        question: text.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
    }
}

/// The built-in question bank.
pub fn embedded_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "What is Python?",
            ["A snake", "A programming language", "A car", "A fruit"],
            1,
            "Python is a popular programming language.",
        ),
        question(
            2,
            "What does 'def' do in Python?",
            ["Defines a function", "Deletes a variable", "Defines a class", "Ends a loop"],
            0,
            "'def' is used to define a function in Python.",
        ),
    ]
}
