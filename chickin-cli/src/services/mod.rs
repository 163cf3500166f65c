// Business logic services layer
//
// This module contains the pure logic units behind the CLI surface:
// query classification, lender matching, and inventory status evaluation.

pub mod classifier;
pub mod inventory;
pub mod matching;
