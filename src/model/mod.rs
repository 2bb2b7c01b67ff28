/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Request descriptor, raw response and the HTTP dispatch primitive
pub mod http;
/// Request models for API calls
pub mod requests;
