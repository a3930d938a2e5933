/// Like `collect::<Result<_, _>>()`, but drives the whole iterator and keeps every error instead of stopping at the first one.
pub(crate) trait CollectAll {
    type Ok;
    type Err;
    fn collect_all<F: FromIterator<Self::Ok>>(self) -> Result<F, Vec<Self::Err>>;
}

impl<T, E, I: Iterator<Item = Result<T, Vec<E>>>> CollectAll for I {
    type Ok = T;
    type Err = E;

    fn collect_all<F: FromIterator<T>>(self) -> Result<F, Vec<E>> {
        let mut results = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(o) => results.push(o),
                Err(e) => errors.extend(e),
            }
        }

        if errors.is_empty() {
            Ok(results.into_iter().collect())
        } else {
            Err(errors)
        }
    }
}
