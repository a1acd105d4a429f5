use crate::answers::AnswerRepository;

pub trait Store {
    type Answers<'a>: AnswerRepository
    where
        Self: 'a;

    fn answers(&self) -> Self::Answers<'_>;
}
