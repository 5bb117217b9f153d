// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Payload encryption for the Mercato client core.
//!
//! The backend speaks a uniform envelope protocol: every request body and
//! response payload is an opaque ciphertext string carried inside
//! `{"data": "<ciphertext>"}`. This crate provides the [`PayloadCodec`] that
//! produces and reverses those strings. Key distribution is out of band;
//! the codec neither manages nor rotates keys.

pub mod codec;
pub mod error;

pub use codec::PayloadCodec;
pub use error::CryptoError;
