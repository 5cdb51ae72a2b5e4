// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod doctor;
pub mod holdings;
pub mod rates;
pub mod snapshots;
pub mod transactions;
