mod loss;
mod parameterize;
