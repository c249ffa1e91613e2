//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod graticule_service;
pub mod output;

pub use self::graticule_service::GraticuleService;
pub use self::output::OutputFormat;
