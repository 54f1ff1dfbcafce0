// File: crates/vitals-core/src/expr.rs
// Summary: Textual series functions of `x`, compiled once with fasteval.

use fasteval::{Compiler, Evaler, Instruction, Parser, Slab};

use crate::error::{ChartError, Result};
use crate::sample::SeriesFn;

/// A compiled expression such as `"sin(2*x)"`. Only `x` is bound.
pub struct Expression {
    source: String,
    slab: Slab,
    inner: Instruction,
}

impl Expression {
    pub fn parse(src: &str) -> Result<Self> {
        let parser = Parser::new();
        let mut slab = Slab::new();
        let compiled = parser
            .parse(src, &mut slab.ps)
            .map_err(|e| ChartError::Expression(format!("'{src}': {e:?}")))?
            .from(&slab.ps)
            .compile(&slab.ps, &mut slab.cs);
        Ok(Self { source: src.to_string(), slab, inner: compiled })
    }

    pub fn source(&self) -> &str { &self.source }
}

impl SeriesFn for Expression {
    fn eval(&self, x: f64) -> Result<f64> {
        let mut ns = |name: &str, _args: Vec<f64>| -> Option<f64> {
            match name {
                "x" => Some(x),
                _ => None,
            }
        };
        self.inner
            .eval(&self.slab, &mut ns)
            .map_err(|e| ChartError::Expression(format!("'{}' at x = {x}: {e:?}", self.source)))
    }
}

impl std::fmt::Debug for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Expression").field(&self.source).finish()
    }
}
