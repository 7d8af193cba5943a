use crate::error::Error;
use indexmap::IndexMap;
use serde::Serialize;

/// Label name -> instruction index, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Labels {
    labels: IndexMap<String, u32>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
        }
    }

    /// Never overwrites: a name can be defined once.
    pub fn define(&mut self, name: &str, addr: u32) -> Result<(), Error> {
        if self.labels.contains_key(name) {
            return Err(Error::DuplicateLabel(name.to_string()));
        }
        self.labels.insert(name.to_string(), addr);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.labels.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<u32, Error> {
        self.get(name)
            .ok_or_else(|| Error::UndefinedLabel(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels.iter().map(|(name, addr)| (name.as_str(), *addr))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Labels {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Labels {
            labels: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[test]
fn test() {
    let mut labels = Labels::new();
    labels.define("main", 1).unwrap();
    labels.define("loop", 4).unwrap();
    assert!(matches!(labels.define("main", 9), Err(Error::DuplicateLabel(name)) if name == "main"));
    assert_eq!(labels.get("main"), Some(1));
    assert_eq!(labels.resolve("loop").unwrap(), 4);
    assert!(matches!(labels.resolve("hoge"), Err(Error::UndefinedLabel(_))));
    assert_eq!(
        labels.iter().collect::<Vec<_>>(),
        vec![("main", 1), ("loop", 4)]
    );
}
