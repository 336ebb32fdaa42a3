/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Request descriptors and HTTP helpers
pub mod http;
/// Session credential and lifecycle state
pub mod session;
