use abaco_core::ScalarFunction;

use super::Error;

/// Evaluates `f` at `x`, boxing any failure into [`Error::Function`].
pub(crate) fn evaluate<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: ScalarFunction + ?Sized,
{
    f.call(x).map_err(|err| Error::Function {
        x,
        source: Box::new(err),
    })
}
