/// Tri-state result of a fetch as seen by the presentation layer.
///
/// A fetch yields `Loading` first and then exactly one of `Success` or
/// `Error`. The error payload is already the localized, user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(message) => Resource::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_variant() {
        let loading: Resource<u32> = Resource::Loading;
        assert!(loading.map(|n| n + 1).is_loading());

        let success = Resource::Success(2u32).map(|n| n * 10);
        assert_eq!(success.data(), Some(&20));

        let error: Resource<u32> = Resource::Error("falhou".into());
        let mapped = error.map(|n| n.to_string());
        assert_eq!(mapped.message(), Some("falhou"));
        assert!(mapped.is_terminal());
    }
}
