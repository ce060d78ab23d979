use super::Site;

pub(crate) static CHAINS: &[(&str, &[[u32; 4]])] = &[
    ("a0", &[[0, 4, 0, 1], [1, 4, 0, 1], [2, 4, 0, 1], [3, 4, 0, 1], [4, 4, 0, 1]]),
    ("a1", &[[0, 2, 0, 3], [1, 2, 0, 3], [2, 2, 0, 3], [3, 2, 0, 3], [4, 2, 0, 3]]),
    ("a2", &[[0, 0, 0, 1], [1, 0, 0, 1], [2, 0, 0, 1], [3, 0, 0, 1], [4, 0, 0, 1]]),
    ("b0", &[[0, 0, 1, 2], [0, 1, 1, 2], [0, 2, 1, 2], [0, 3, 1, 2], [0, 4, 1, 2]]),
    ("b1", &[[2, 0, 1, 1], [2, 1, 1, 1], [2, 2, 1, 1], [2, 3, 1, 1], [2, 4, 1, 1]]),
    ("b2", &[[4, 0, 1, 1], [4, 1, 1, 1], [4, 2, 1, 1], [4, 3, 1, 1], [4, 4, 1, 1]]),
    ("c10", &[[1, 3, 0, 2], [2, 3, 0, 2], [3, 3, 0, 2]]),
    ("c11", &[[1, 1, 0, 2], [2, 1, 0, 2], [3, 1, 0, 2]]),
    ("c21", &[[3, 3, 0, 3], [4, 3, 0, 3], [5, 3, 0, 3], [5, 3, 1, 1]]),
    ("c22", &[[3, 1, 0, 3], [4, 1, 0, 3], [5, 1, 0, 3]]),
    (
        "c32",
        &[
            [5, 1, 1, 0],
            [5, 2, 1, 0],
            [5, 2, 0, 0],
            [4, 2, 0, 0],
            [4, 2, 1, 0],
            [4, 3, 1, 0],
            [4, 3, 0, 2],
            [5, 3, 0, 2],
        ],
    ),
    ("p0", &[[0, 4, 0, 0], [0, 4, 1, 1]]),
    ("p1", &[[1, 3, 1, 1]]),
    ("p2", &[[3, 3, 1, 2]]),
    ("p3", &[[5, 3, 1, 0]]),
    ("p4", &[[5, 1, 1, 2]]),
    ("p5", &[[5, 1, 0, 2]]),
    ("s00", &[[0, 2, 0, 2], [1, 2, 0, 2], [1, 2, 1, 2], [1, 3, 1, 2]]),
    ("s01", &[[0, 0, 0, 0], [1, 0, 0, 0], [1, 0, 1, 2], [1, 1, 1, 2]]),
    (
        "s11",
        &[
            [1, 1, 1, 1],
            [1, 2, 1, 1],
            [1, 2, 0, 0],
            [2, 2, 0, 0],
            [3, 2, 0, 0],
            [3, 2, 1, 3],
            [3, 3, 1, 3],
        ],
    ),
    ("s12", &[[2, 0, 0, 0], [3, 0, 0, 0], [3, 0, 1, 3], [3, 1, 1, 3]]),
    (
        "s22",
        &[
            [3, 1, 1, 1],
            [3, 2, 1, 1],
            [3, 2, 0, 1],
            [4, 2, 0, 1],
            [5, 2, 0, 1],
            [5, 2, 1, 2],
            [5, 3, 1, 2],
        ],
    ),
    ("s23", &[[4, 0, 0, 0], [5, 0, 0, 0], [5, 0, 1, 3], [5, 1, 1, 3]]),
    ("t01", &[[1, 3, 1, 0], [1, 4, 1, 0], [1, 4, 0, 0], [2, 4, 0, 0]]),
    ("t02", &[[3, 3, 1, 0], [3, 4, 1, 0], [3, 4, 0, 0], [4, 4, 0, 0]]),
    ("t11", &[[1, 1, 1, 0], [1, 2, 1, 0], [1, 2, 0, 1], [2, 2, 0, 1]]),
    ("t12", &[[3, 1, 1, 0], [3, 2, 1, 0], [3, 2, 0, 2], [4, 2, 0, 2]]),
    ("aux0", &[[0, 0, 1, 0]]),
    ("aux1", &[[0, 2, 1, 0]]),
    ("aux2", &[[0, 4, 1, 0]]),
    ("aux3", &[[1, 1, 0, 0]]),
    ("aux4", &[[1, 1, 0, 1]]),
    ("aux5", &[[1, 3, 0, 0]]),
    ("aux6", &[[1, 3, 0, 1]]),
    ("aux7", &[[2, 0, 1, 0]]),
    ("aux8", &[[2, 2, 1, 0]]),
    ("aux9", &[[2, 4, 1, 0]]),
    ("aux10", &[[3, 1, 0, 0]]),
    ("aux11", &[[3, 1, 0, 1]]),
    ("aux12", &[[3, 1, 1, 2]]),
    ("aux13", &[[3, 3, 0, 0]]),
    ("aux14", &[[3, 3, 0, 1]]),
    ("aux15", &[[3, 3, 1, 1]]),
    ("aux16", &[[4, 0, 1, 0]]),
    ("aux17", &[[4, 2, 1, 2]]),
    ("aux18", &[[4, 4, 1, 0]]),
    ("aux19", &[[5, 1, 0, 0]]),
    ("aux20", &[[5, 1, 0, 1]]),
    ("aux21", &[[5, 1, 1, 1]]),
    ("aux22", &[[5, 3, 0, 0]]),
    ("aux23", &[[5, 3, 0, 1]]),
];

pub(crate) static LINEAR: &[(Site, f64)] = &[
    (("s01", [0, 0, 0, 0]), 1.0),
    (("a2", [0, 0, 0, 1]), -0.5),
    (("b0", [0, 0, 1, 2]), -0.5),
    (("s00", [0, 2, 0, 2]), 1.0),
    (("a1", [0, 2, 0, 3]), -0.5),
    (("b0", [0, 2, 1, 2]), -0.5),
    (("p0", [0, 4, 0, 0]), 1.0),
    (("a0", [0, 4, 0, 1]), -0.5),
    (("b0", [0, 4, 1, 2]), -0.5),
    (("aux3", [1, 1, 0, 0]), 1.0),
    (("c11", [1, 1, 0, 2]), 1.0),
    (("s11", [1, 1, 1, 1]), 1.0),
    (("aux5", [1, 3, 0, 0]), 1.0),
    (("c10", [1, 3, 0, 2]), 1.0),
    (("p1", [1, 3, 1, 1]), 1.0),
    (("s12", [2, 0, 0, 0]), 1.0),
    (("a2", [2, 0, 0, 1]), -0.5),
    (("b1", [2, 0, 1, 1]), -0.5),
    (("t11", [2, 2, 0, 1]), 1.0),
    (("a1", [2, 2, 0, 3]), -0.5),
    (("b1", [2, 2, 1, 1]), -0.5),
    (("t01", [2, 4, 0, 0]), 1.0),
    (("a0", [2, 4, 0, 1]), -0.5),
    (("b1", [2, 4, 1, 1]), -0.5),
    (("s23", [4, 0, 0, 0]), 1.0),
    (("a2", [4, 0, 0, 1]), -0.5),
    (("b2", [4, 0, 1, 1]), -0.5),
    (("t12", [4, 2, 0, 2]), 1.0),
    (("a1", [4, 2, 0, 3]), -0.5),
    (("b2", [4, 2, 1, 1]), -0.5),
    (("t02", [4, 4, 0, 0]), 1.0),
    (("a0", [4, 4, 0, 1]), -0.5),
    (("b2", [4, 4, 1, 1]), -0.5),
    (("aux22", [5, 3, 0, 0]), 1.0),
    (("c32", [5, 3, 0, 2]), 1.0),
    (("p3", [5, 3, 1, 0]), 1.0),
];

pub(crate) static COUPLINGS: &[(Site, Site, f64)] = &[
    (("s01", [0, 0, 0, 0]), ("aux0", [0, 0, 1, 0]), 1.0),
    (("s01", [0, 0, 0, 0]), ("b0", [0, 0, 1, 2]), -1.0),
    (("s01", [0, 0, 0, 0]), ("s01", [1, 0, 0, 0]), -1.0),
    (("a2", [0, 0, 0, 1]), ("aux0", [0, 0, 1, 0]), 1.0),
    (("a2", [0, 0, 0, 1]), ("b0", [0, 0, 1, 2]), 0.5),
    (("a2", [0, 0, 0, 1]), ("a2", [1, 0, 0, 1]), -1.0),
    (("b0", [0, 0, 1, 2]), ("b0", [0, 1, 1, 2]), -1.0),
    (("b0", [0, 1, 1, 2]), ("b0", [0, 2, 1, 2]), -1.0),
    (("s00", [0, 2, 0, 2]), ("aux1", [0, 2, 1, 0]), 1.0),
    (("s00", [0, 2, 0, 2]), ("b0", [0, 2, 1, 2]), -1.0),
    (("s00", [0, 2, 0, 2]), ("s00", [1, 2, 0, 2]), -1.0),
    (("a1", [0, 2, 0, 3]), ("aux1", [0, 2, 1, 0]), 1.0),
    (("a1", [0, 2, 0, 3]), ("b0", [0, 2, 1, 2]), 0.5),
    (("a1", [0, 2, 0, 3]), ("a1", [1, 2, 0, 3]), -1.0),
    (("b0", [0, 2, 1, 2]), ("b0", [0, 3, 1, 2]), -1.0),
    (("b0", [0, 3, 1, 2]), ("b0", [0, 4, 1, 2]), -1.0),
    (("p0", [0, 4, 0, 0]), ("aux2", [0, 4, 1, 0]), 1.0),
    (("p0", [0, 4, 0, 0]), ("p0", [0, 4, 1, 1]), -1.0),
    (("p0", [0, 4, 0, 0]), ("b0", [0, 4, 1, 2]), -1.0),
    (("a0", [0, 4, 0, 1]), ("aux2", [0, 4, 1, 0]), 1.0),
    (("a0", [0, 4, 0, 1]), ("b0", [0, 4, 1, 2]), 0.5),
    (("a0", [0, 4, 0, 1]), ("a0", [1, 4, 0, 1]), -1.0),
    (("s01", [1, 0, 0, 0]), ("s01", [1, 0, 1, 2]), -1.0),
    (("a2", [1, 0, 0, 1]), ("a2", [2, 0, 0, 1]), -1.0),
    (("s01", [1, 0, 1, 2]), ("s01", [1, 1, 1, 2]), -1.0),
    (("aux3", [1, 1, 0, 0]), ("t11", [1, 1, 1, 0]), 1.0),
    (("aux3", [1, 1, 0, 0]), ("s11", [1, 1, 1, 1]), 1.0),
    (("aux3", [1, 1, 0, 0]), ("s01", [1, 1, 1, 2]), 1.0),
    (("aux4", [1, 1, 0, 1]), ("t11", [1, 1, 1, 0]), -1.0),
    (("aux4", [1, 1, 0, 1]), ("s01", [1, 1, 1, 2]), 1.0),
    (("c11", [1, 1, 0, 2]), ("t11", [1, 1, 1, 0]), -1.0),
    (("c11", [1, 1, 0, 2]), ("s11", [1, 1, 1, 1]), 1.0),
    (("c11", [1, 1, 0, 2]), ("s01", [1, 1, 1, 2]), -1.0),
    (("c11", [1, 1, 0, 2]), ("c11", [2, 1, 0, 2]), -1.0),
    (("t11", [1, 1, 1, 0]), ("t11", [1, 2, 1, 0]), -1.0),
    (("s11", [1, 1, 1, 1]), ("s11", [1, 2, 1, 1]), -1.0),
    (("s11", [1, 2, 0, 0]), ("s11", [1, 2, 1, 1]), -1.0),
    (("s11", [1, 2, 0, 0]), ("s11", [2, 2, 0, 0]), -1.0),
    (("t11", [1, 2, 0, 1]), ("t11", [1, 2, 1, 0]), -1.0),
    (("t11", [1, 2, 0, 1]), ("t11", [2, 2, 0, 1]), -1.0),
    (("s00", [1, 2, 0, 2]), ("s00", [1, 2, 1, 2]), -1.0),
    (("a1", [1, 2, 0, 3]), ("a1", [2, 2, 0, 3]), -1.0),
    (("s00", [1, 2, 1, 2]), ("s00", [1, 3, 1, 2]), -1.0),
    (("aux5", [1, 3, 0, 0]), ("t01", [1, 3, 1, 0]), 1.0),
    (("aux5", [1, 3, 0, 0]), ("p1", [1, 3, 1, 1]), 1.0),
    (("aux5", [1, 3, 0, 0]), ("s00", [1, 3, 1, 2]), 1.0),
    (("aux6", [1, 3, 0, 1]), ("t01", [1, 3, 1, 0]), -1.0),
    (("aux6", [1, 3, 0, 1]), ("s00", [1, 3, 1, 2]), 1.0),
    (("c10", [1, 3, 0, 2]), ("t01", [1, 3, 1, 0]), -1.0),
    (("c10", [1, 3, 0, 2]), ("p1", [1, 3, 1, 1]), 1.0),
    (("c10", [1, 3, 0, 2]), ("s00", [1, 3, 1, 2]), -1.0),
    (("c10", [1, 3, 0, 2]), ("c10", [2, 3, 0, 2]), -1.0),
    (("t01", [1, 3, 1, 0]), ("t01", [1, 4, 1, 0]), -1.0),
    (("t01", [1, 4, 0, 0]), ("t01", [1, 4, 1, 0]), -1.0),
    (("t01", [1, 4, 0, 0]), ("t01", [2, 4, 0, 0]), -1.0),
    (("a0", [1, 4, 0, 1]), ("a0", [2, 4, 0, 1]), -1.0),
    (("s12", [2, 0, 0, 0]), ("aux7", [2, 0, 1, 0]), 1.0),
    (("s12", [2, 0, 0, 0]), ("b1", [2, 0, 1, 1]), -1.0),
    (("s12", [2, 0, 0, 0]), ("s12", [3, 0, 0, 0]), -1.0),
    (("a2", [2, 0, 0, 1]), ("aux7", [2, 0, 1, 0]), 1.0),
    (("a2", [2, 0, 0, 1]), ("b1", [2, 0, 1, 1]), 0.5),
    (("a2", [2, 0, 0, 1]), ("a2", [3, 0, 0, 1]), -1.0),
    (("b1", [2, 0, 1, 1]), ("b1", [2, 1, 1, 1]), -1.0),
    (("c11", [2, 1, 0, 2]), ("c11", [3, 1, 0, 2]), -1.0),
    (("b1", [2, 1, 1, 1]), ("b1", [2, 2, 1, 1]), -1.0),
    (("s11", [2, 2, 0, 0]), ("s11", [3, 2, 0, 0]), -1.0),
    (("t11", [2, 2, 0, 1]), ("aux8", [2, 2, 1, 0]), 1.0),
    (("t11", [2, 2, 0, 1]), ("b1", [2, 2, 1, 1]), -1.0),
    (("a1", [2, 2, 0, 3]), ("aux8", [2, 2, 1, 0]), 1.0),
    (("a1", [2, 2, 0, 3]), ("b1", [2, 2, 1, 1]), 0.5),
    (("a1", [2, 2, 0, 3]), ("a1", [3, 2, 0, 3]), -1.0),
    (("b1", [2, 2, 1, 1]), ("b1", [2, 3, 1, 1]), -1.0),
    (("c10", [2, 3, 0, 2]), ("c10", [3, 3, 0, 2]), -1.0),
    (("b1", [2, 3, 1, 1]), ("b1", [2, 4, 1, 1]), -1.0),
    (("t01", [2, 4, 0, 0]), ("aux9", [2, 4, 1, 0]), 1.0),
    (("t01", [2, 4, 0, 0]), ("b1", [2, 4, 1, 1]), -1.0),
    (("a0", [2, 4, 0, 1]), ("aux9", [2, 4, 1, 0]), 1.0),
    (("a0", [2, 4, 0, 1]), ("b1", [2, 4, 1, 1]), 0.5),
    (("a0", [2, 4, 0, 1]), ("a0", [3, 4, 0, 1]), -1.0),
    (("s12", [3, 0, 0, 0]), ("s12", [3, 0, 1, 3]), -1.0),
    (("a2", [3, 0, 0, 1]), ("a2", [4, 0, 0, 1]), -1.0),
    (("s12", [3, 0, 1, 3]), ("s12", [3, 1, 1, 3]), -1.0),
    (("aux10", [3, 1, 0, 0]), ("t12", [3, 1, 1, 0]), -1.0),
    (("aux10", [3, 1, 0, 0]), ("s22", [3, 1, 1, 1]), 1.0),
    (("aux10", [3, 1, 0, 0]), ("aux12", [3, 1, 1, 2]), -1.0),
    (("aux10", [3, 1, 0, 0]), ("s12", [3, 1, 1, 3]), 1.0),
    (("aux11", [3, 1, 0, 1]), ("t12", [3, 1, 1, 0]), 1.0),
    (("aux11", [3, 1, 0, 1]), ("s22", [3, 1, 1, 1]), 1.0),
    (("aux11", [3, 1, 0, 1]), ("aux12", [3, 1, 1, 2]), -1.0),
    (("aux11", [3, 1, 0, 1]), ("s12", [3, 1, 1, 3]), -1.0),
    (("c11", [3, 1, 0, 2]), ("aux12", [3, 1, 1, 2]), 1.0),
    (("c22", [3, 1, 0, 3]), ("t12", [3, 1, 1, 0]), -1.0),
    (("c22", [3, 1, 0, 3]), ("s22", [3, 1, 1, 1]), 1.0),
    (("c22", [3, 1, 0, 3]), ("aux12", [3, 1, 1, 2]), 1.0),
    (("c22", [3, 1, 0, 3]), ("s12", [3, 1, 1, 3]), -1.0),
    (("c22", [3, 1, 0, 3]), ("c22", [4, 1, 0, 3]), -1.0),
    (("t12", [3, 1, 1, 0]), ("t12", [3, 2, 1, 0]), -1.0),
    (("s22", [3, 1, 1, 1]), ("s22", [3, 2, 1, 1]), -1.0),
    (("s11", [3, 2, 0, 0]), ("s11", [3, 2, 1, 3]), -1.0),
    (("s22", [3, 2, 0, 1]), ("s22", [3, 2, 1, 1]), -1.0),
    (("s22", [3, 2, 0, 1]), ("s22", [4, 2, 0, 1]), -1.0),
    (("t12", [3, 2, 0, 2]), ("t12", [3, 2, 1, 0]), -1.0),
    (("t12", [3, 2, 0, 2]), ("t12", [4, 2, 0, 2]), -1.0),
    (("a1", [3, 2, 0, 3]), ("a1", [4, 2, 0, 3]), -1.0),
    (("s11", [3, 2, 1, 3]), ("s11", [3, 3, 1, 3]), -1.0),
    (("aux13", [3, 3, 0, 0]), ("t02", [3, 3, 1, 0]), -1.0),
    (("aux13", [3, 3, 0, 0]), ("aux15", [3, 3, 1, 1]), -1.0),
    (("aux13", [3, 3, 0, 0]), ("p2", [3, 3, 1, 2]), 1.0),
    (("aux13", [3, 3, 0, 0]), ("s11", [3, 3, 1, 3]), 1.0),
    (("aux14", [3, 3, 0, 1]), ("t02", [3, 3, 1, 0]), 1.0),
    (("aux14", [3, 3, 0, 1]), ("aux15", [3, 3, 1, 1]), -1.0),
    (("aux14", [3, 3, 0, 1]), ("p2", [3, 3, 1, 2]), 1.0),
    (("aux14", [3, 3, 0, 1]), ("s11", [3, 3, 1, 3]), -1.0),
    (("c10", [3, 3, 0, 2]), ("aux15", [3, 3, 1, 1]), 1.0),
    (("c21", [3, 3, 0, 3]), ("t02", [3, 3, 1, 0]), -1.0),
    (("c21", [3, 3, 0, 3]), ("aux15", [3, 3, 1, 1]), 1.0),
    (("c21", [3, 3, 0, 3]), ("p2", [3, 3, 1, 2]), 1.0),
    (("c21", [3, 3, 0, 3]), ("s11", [3, 3, 1, 3]), -1.0),
    (("c21", [3, 3, 0, 3]), ("c21", [4, 3, 0, 3]), -1.0),
    (("t02", [3, 3, 1, 0]), ("t02", [3, 4, 1, 0]), -1.0),
    (("t02", [3, 4, 0, 0]), ("t02", [3, 4, 1, 0]), -1.0),
    (("t02", [3, 4, 0, 0]), ("t02", [4, 4, 0, 0]), -1.0),
    (("a0", [3, 4, 0, 1]), ("a0", [4, 4, 0, 1]), -1.0),
    (("s23", [4, 0, 0, 0]), ("aux16", [4, 0, 1, 0]), 1.0),
    (("s23", [4, 0, 0, 0]), ("b2", [4, 0, 1, 1]), -1.0),
    (("s23", [4, 0, 0, 0]), ("s23", [5, 0, 0, 0]), -1.0),
    (("a2", [4, 0, 0, 1]), ("aux16", [4, 0, 1, 0]), 1.0),
    (("a2", [4, 0, 0, 1]), ("b2", [4, 0, 1, 1]), 0.5),
    (("b2", [4, 0, 1, 1]), ("b2", [4, 1, 1, 1]), -1.0),
    (("c22", [4, 1, 0, 3]), ("c22", [5, 1, 0, 3]), -1.0),
    (("b2", [4, 1, 1, 1]), ("b2", [4, 2, 1, 1]), -1.0),
    (("c32", [4, 2, 0, 0]), ("c32", [4, 2, 1, 0]), -1.0),
    (("c32", [4, 2, 0, 0]), ("c32", [5, 2, 0, 0]), -1.0),
    (("s22", [4, 2, 0, 1]), ("s22", [5, 2, 0, 1]), -1.0),
    (("t12", [4, 2, 0, 2]), ("b2", [4, 2, 1, 1]), -1.0),
    (("t12", [4, 2, 0, 2]), ("aux17", [4, 2, 1, 2]), 1.0),
    (("a1", [4, 2, 0, 3]), ("b2", [4, 2, 1, 1]), 0.5),
    (("a1", [4, 2, 0, 3]), ("aux17", [4, 2, 1, 2]), 1.0),
    (("c32", [4, 2, 1, 0]), ("c32", [4, 3, 1, 0]), -1.0),
    (("b2", [4, 2, 1, 1]), ("b2", [4, 3, 1, 1]), -1.0),
    (("c32", [4, 3, 0, 2]), ("c32", [4, 3, 1, 0]), -1.0),
    (("c32", [4, 3, 0, 2]), ("c32", [5, 3, 0, 2]), -1.0),
    (("c21", [4, 3, 0, 3]), ("c21", [5, 3, 0, 3]), -1.0),
    (("b2", [4, 3, 1, 1]), ("b2", [4, 4, 1, 1]), -1.0),
    (("t02", [4, 4, 0, 0]), ("aux18", [4, 4, 1, 0]), 1.0),
    (("t02", [4, 4, 0, 0]), ("b2", [4, 4, 1, 1]), -1.0),
    (("a0", [4, 4, 0, 1]), ("aux18", [4, 4, 1, 0]), 1.0),
    (("a0", [4, 4, 0, 1]), ("b2", [4, 4, 1, 1]), 0.5),
    (("s23", [5, 0, 0, 0]), ("s23", [5, 0, 1, 3]), -1.0),
    (("s23", [5, 0, 1, 3]), ("s23", [5, 1, 1, 3]), -1.0),
    (("aux19", [5, 1, 0, 0]), ("c32", [5, 1, 1, 0]), -1.0),
    (("aux19", [5, 1, 0, 0]), ("aux21", [5, 1, 1, 1]), -1.0),
    (("aux19", [5, 1, 0, 0]), ("p4", [5, 1, 1, 2]), 1.0),
    (("aux19", [5, 1, 0, 0]), ("s23", [5, 1, 1, 3]), 1.0),
    (("aux20", [5, 1, 0, 1]), ("c32", [5, 1, 1, 0]), 1.0),
    (("aux20", [5, 1, 0, 1]), ("aux21", [5, 1, 1, 1]), -1.0),
    (("aux20", [5, 1, 0, 1]), ("p4", [5, 1, 1, 2]), 1.0),
    (("aux20", [5, 1, 0, 1]), ("s23", [5, 1, 1, 3]), -1.0),
    (("p5", [5, 1, 0, 2]), ("c32", [5, 1, 1, 0]), -1.0),
    (("p5", [5, 1, 0, 2]), ("aux21", [5, 1, 1, 1]), 1.0),
    (("p5", [5, 1, 0, 2]), ("p4", [5, 1, 1, 2]), 1.0),
    (("p5", [5, 1, 0, 2]), ("s23", [5, 1, 1, 3]), -1.0),
    (("c22", [5, 1, 0, 3]), ("aux21", [5, 1, 1, 1]), 1.0),
    (("c32", [5, 1, 1, 0]), ("c32", [5, 2, 1, 0]), -1.0),
    (("c32", [5, 2, 0, 0]), ("c32", [5, 2, 1, 0]), -1.0),
    (("s22", [5, 2, 0, 1]), ("s22", [5, 2, 1, 2]), -1.0),
    (("s22", [5, 2, 1, 2]), ("s22", [5, 3, 1, 2]), -1.0),
    (("aux22", [5, 3, 0, 0]), ("p3", [5, 3, 1, 0]), 1.0),
    (("aux22", [5, 3, 0, 0]), ("c21", [5, 3, 1, 1]), 1.0),
    (("aux22", [5, 3, 0, 0]), ("s22", [5, 3, 1, 2]), 1.0),
    (("aux23", [5, 3, 0, 1]), ("c21", [5, 3, 1, 1]), 1.0),
    (("aux23", [5, 3, 0, 1]), ("s22", [5, 3, 1, 2]), -1.0),
    (("c32", [5, 3, 0, 2]), ("p3", [5, 3, 1, 0]), 1.0),
    (("c32", [5, 3, 0, 2]), ("c21", [5, 3, 1, 1]), -1.0),
    (("c32", [5, 3, 0, 2]), ("s22", [5, 3, 1, 2]), -1.0),
    (("c21", [5, 3, 0, 3]), ("c21", [5, 3, 1, 1]), -1.0),
];
