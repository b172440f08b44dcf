use super::{Question, RawQuestion};

pub const BANK_HEADER: &str =
    "category,question,option1,option2,option3,option4,answer,response1,response2,response3,response4";

/// A question whose option and response texts spell out their original slot,
/// e.g. `Science 3 option 2` and `Science 3 response 2`.
pub fn raw_question(category: &str, id: usize) -> RawQuestion {
    let option = |slot: usize| format!("{} {} option {}", category, id, slot);
    let response = |slot: usize| format!("{} {} response {}", category, id, slot);
    RawQuestion {
        category: category.to_owned(),
        question: format!("{} question {}", category, id),
        option1: option(1),
        option2: option(2),
        option3: option(3),
        option4: option(4),
        answer: (1 + id % 4).to_string(),
        response1: response(1),
        response2: response(2),
        response3: response(3),
        response4: response(4),
    }
}

pub fn question(category: &str, id: usize) -> Question {
    Question::try_from(raw_question(category, id)).unwrap()
}

pub fn pool(categories: &[(&str, usize)]) -> Vec<Question> {
    categories
        .iter()
        .flat_map(|(category, count)| (0..*count).map(move |id| question(category, id)))
        .collect()
}

pub fn bank_csv(categories: &[(&str, usize)]) -> String {
    let mut writer = csv::Writer::from_writer(vec![]);
    for (category, count) in categories {
        for id in 0..*count {
            writer.serialize(raw_question(category, id)).unwrap();
        }
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}
