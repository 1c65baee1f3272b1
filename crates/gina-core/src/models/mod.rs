pub mod assessment;
pub mod observation;
pub mod recommendation;
pub mod workup;
