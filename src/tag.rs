/// A value captured from a cursor at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag<T> {
    value: Option<T>,
}

impl<T> Tag<T> {
    pub(crate) fn new(value: Option<T>) -> Self {
        Tag { value }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T: Clone> Tag<T> {
    /// Turns the tag into a zero-argument accessor returning the captured value.
    pub fn into_fn(self) -> impl Fn() -> Option<T> {
        move || self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_value() {
        let tag = Tag::new(Some("a".to_string()));
        assert_eq!(tag.get().map(String::as_str), Some("a"));
        let f = tag.clone().into_fn();
        assert_eq!(f(), Some("a".to_string()));
        assert_eq!(f(), Some("a".to_string()));
        assert_eq!(tag.into_inner(), Some("a".to_string()));
    }

    #[test]
    fn holds_absence() {
        let tag: Tag<i32> = Tag::new(None);
        assert_eq!(tag.get(), None);
        assert_eq!(tag.into_fn()(), None);
    }
}
