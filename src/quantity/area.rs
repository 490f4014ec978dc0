quantity!(SquareMetres, via: f64, suffix: "m²", precision: 1);
