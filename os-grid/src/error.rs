//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GridError {
    /// Latitude refinement of the datum shift did not settle.
    #[error("Latitude refinement did not converge after {iterations} iterations")]
    NotConverged { iterations: u32 },

    #[error("Viewport lies outside the National Grid coverage")]
    OutsideGrid,

    #[error("Graticule with {points} points exceeds the limit of {max}")]
    TooManyPoints { points: usize, max: usize },

    #[error("Invalid grid step: {0}")]
    InvalidStep(u32),

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Invalid grid reference: {0}")]
    InvalidGridRef(String),
}
