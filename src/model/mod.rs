/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Request executor and response classification
pub mod http;
/// Request descriptor shared by all endpoint tasks
pub mod request;
/// Typed request parameters and payloads
pub mod requests;
/// Response envelope and error record
pub mod responses;
