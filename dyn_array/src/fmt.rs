use core::fmt::{Debug, Display, Formatter, Result};

use crate::ArrayList;

impl<T> Debug for ArrayList<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes the elements between braces, as in `{ 1, 2, 3 }`.
///
/// An empty list is written as `{  }`.
impl<T> Display for ArrayList<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("{ ")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(item, f)?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod test {
    use alloc::{format, string::ToString};

    use crate::ArrayList;

    #[test]
    fn display() {
        let list: ArrayList<i32> = [1, 1, 2, 8].into_iter().collect();
        assert_eq!(list.to_string(), "{ 1, 1, 2, 8 }");

        let single: ArrayList<&str> = ["only"].into_iter().collect();
        assert_eq!(single.to_string(), "{ only }");
    }

    #[test]
    fn display_empty() {
        assert_eq!(ArrayList::<i32>::new().to_string(), "{  }");
    }

    #[test]
    fn display_forwards_the_precision() {
        let list: ArrayList<f64> = [0.5, 1.26].into_iter().collect();
        assert_eq!(format!("{list:.1}"), "{ 0.5, 1.3 }");
    }

    #[test]
    fn debug() {
        let list: ArrayList<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }
}
