/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “SkyWatch” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! thin query boundary over the fleet: translates `GET /telescope/{idx}` into
//! Fleet::visible_satellites calls, nothing more

use std::path::Path as FsPath;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path,State},
    http::StatusCode,
    response::{IntoResponse,Json,Response},
    routing::{Router,get},
};
use clap::Parser;
use tracing::info;

use skywatch_orbital::config::{SimConfig,load_config};
use skywatch_orbital::errors::OrbitalSimError;
use skywatch_orbital::fleet::Fleet;

#[derive(Parser)]
#[command(about="serve telescope visibility queries over a simulated satellite fleet")]
struct Args {
    #[arg(long, default_value="skywatch.ron", help="pathname of RON sim config")]
    config: String,

    #[arg(long, default_value="127.0.0.1")]
    host: String,

    #[arg(long, default_value_t=8333)]
    port: u16,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config: SimConfig = if FsPath::new( &args.config).exists() {
        load_config( &args.config)?
    } else {
        info!("no config at {}, using built-in defaults", args.config);
        SimConfig::default()
    };

    let mut fleet = Fleet::new( &config)?;
    fleet.start_all()?;
    info!("started {} satellites, {} telescopes", fleet.satellite_count(), fleet.telescope_count());

    let app = Router::new()
        .route( "/telescope/{telescope_idx}", get( get_telescope_readings))
        .with_state( Arc::new( fleet));

    let listener = tokio::net::TcpListener::bind( (args.host.as_str(), args.port)).await?;
    info!("serving telescope queries on {}:{}", args.host, args.port);
    axum::serve( listener, app).await?;

    Ok(())
}

async fn get_telescope_readings (Path(telescope_idx): Path<usize>, State(fleet): State<Arc<Fleet>>)->Response {
    match fleet.visible_satellites( telescope_idx) {
        Ok(readings) => Json(readings).into_response(),
        Err(e @ OrbitalSimError::LookupError{..}) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
