// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error while writing generated source to {0}")]
    FailedToWriteFile(PathBuf, #[source] std::io::Error),
}

pub type SrcGenResult<T> = std::result::Result<T, Error>;
