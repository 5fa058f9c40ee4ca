mod transform;

pub use transform::model_matrix;
