//! Order-preserving fan-out over independent work items

use crate::error::Result;

/// Apply `f` to every item and collect the results in input order.
///
/// Runs on the rayon pool with the `parallel` feature and sequentially without
/// it. The first error is returned and the remaining results are dropped.
#[cfg(feature = "parallel")]
pub fn try_map_ordered<I, T, F>(items: Vec<I>, f: F) -> Result<Vec<T>>
where
    I: Send,
    T: Send,
    F: Fn(I) -> Result<T> + Send + Sync,
{
    use rayon::prelude::*;
    items.into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn try_map_ordered<I, T, F>(items: Vec<I>, f: F) -> Result<Vec<T>>
where
    F: Fn(I) -> Result<T>,
{
    items.into_iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlcmError;

    #[test]
    fn test_results_keep_input_order() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let items: Vec<u32> = (0..1_000).collect();
        let squares = try_map_ordered(items, |v| Ok(u64::from(v) * u64::from(v)))?;
        assert_eq!(squares.len(), 1_000);
        assert!(squares.iter().enumerate().all(|(i, &sq)| sq == (i * i) as u64));
        Ok(())
    }

    #[test]
    fn test_any_error_fails_the_whole_map() {
        let result = try_map_ordered((0..100u32).collect::<Vec<_>>(), |v: u32| {
            if v == 42 {
                Err(GlcmError::UnknownProperty(v.to_string()))
            } else {
                Ok(v)
            }
        });
        assert!(matches!(result, Err(GlcmError::UnknownProperty(ref s)) if s == "42"));
    }

    #[test]
    fn test_empty_input() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let out: Vec<u8> = try_map_ordered(Vec::<u8>::new(), Ok)?;
        assert!(out.is_empty());
        Ok(())
    }
}
