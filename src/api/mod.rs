// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP surface for VNF instance lifecycle requests.

use actix_web::web::ServiceConfig;

pub mod error;
pub mod handlers;
pub mod model;

pub use self::error::ApiError;
pub use self::handlers::VnfInstanceService;
pub use self::model::{CreateVnfRequest, GeneralResponse, ListVnfResponse, OofParameters};

/// Configure an HTTP Server with all endpoints in this API module.
///
/// The caller registers a [`VnfInstanceService`] as application data.
pub fn configure(config: &mut ServiceConfig) {
    config
        .service(self::handlers::create)
        .service(self::handlers::list)
        .service(self::handlers::get)
        .service(self::handlers::delete);
}
