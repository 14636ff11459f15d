// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors for the gRPC server and client configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing the grpc server service")]
    MissingServices,
    #[error("missing grpc endpoint")]
    MissingEndpoint,
    #[error("endpoint parse error: {0}")]
    EndpointParse(#[from] std::net::AddrParseError),
    #[error("URI parse error: {0}")]
    UriParse(#[from] http::uri::InvalidUri),
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("bind error: {0}")]
    Bind(#[from] std::io::Error),
}
