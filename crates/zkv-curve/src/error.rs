// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error("invalid field element: {0}")]
    InvalidFieldElement(&'static str),

    #[error("division by zero")]
    DivisionByZero,

    #[error("point is not on the curve")]
    PointNotOnCurve,

    #[error("point is not in the prime-order subgroup")]
    InvalidSubgroup,

    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

pub type CurveResult<T> = Result<T, CurveError>;
