//! Asplund, Grevesse, Sauval & Scott (2009) present-day photospheric abundances.

/// log ε = log10(N_X / N_H) + 12. `None` where no photospheric value exists.
pub(crate) const ASPLUND09_ELEMENTS: &[(&str, Option<f64>)] = &[
    ("H", Some(12.0)),
    ("He", Some(10.93)),
    ("Li", Some(1.05)),
    ("Be", Some(1.38)),
    ("B", Some(2.7)),
    ("C", Some(8.43)),
    ("N", Some(7.83)),
    ("O", Some(8.69)),
    ("F", Some(4.56)),
    ("Ne", Some(7.93)),
    ("Na", Some(6.24)),
    ("Mg", Some(7.6)),
    ("Al", Some(6.45)),
    ("Si", Some(7.51)),
    ("P", Some(5.41)),
    ("S", Some(7.12)),
    ("Cl", Some(5.5)),
    ("Ar", Some(6.4)),
    ("K", Some(5.03)),
    ("Ca", Some(6.34)),
    ("Sc", Some(3.15)),
    ("Ti", Some(4.95)),
    ("V", Some(3.93)),
    ("Cr", Some(5.64)),
    ("Mn", Some(5.43)),
    ("Fe", Some(7.5)),
    ("Co", Some(4.99)),
    ("Ni", Some(6.22)),
    ("Cu", Some(4.19)),
    ("Zn", Some(4.56)),
    ("Ga", Some(3.04)),
    ("Ge", Some(3.65)),
    ("As", None),
    ("Se", None),
    ("Br", None),
    ("Kr", Some(3.25)),
    ("Rb", Some(2.52)),
    ("Sr", Some(2.87)),
    ("Y", Some(2.21)),
    ("Zr", Some(2.58)),
    ("Nb", Some(1.46)),
    ("Mo", Some(1.88)),
    ("Ru", Some(1.75)),
    ("Rh", Some(0.91)),
    ("Pd", Some(1.57)),
    ("Ag", Some(0.94)),
    ("Cd", None),
    ("In", Some(0.8)),
    ("Sn", Some(2.04)),
    ("Sb", None),
    ("Te", None),
    ("I", None),
    ("Xe", Some(2.24)),
    ("Cs", None),
    ("Ba", Some(2.18)),
    ("La", Some(1.1)),
    ("Ce", Some(1.58)),
    ("Pr", Some(0.72)),
    ("Nd", Some(1.42)),
    ("Sm", Some(0.96)),
    ("Eu", Some(0.52)),
    ("Gd", Some(1.07)),
    ("Tb", Some(0.3)),
    ("Dy", Some(1.1)),
    ("Ho", Some(0.48)),
    ("Er", Some(0.92)),
    ("Tm", Some(0.1)),
    ("Yb", Some(0.84)),
    ("Lu", Some(0.1)),
    ("Hf", Some(0.85)),
    ("Ta", None),
    ("W", Some(0.85)),
    ("Re", None),
    ("Os", Some(1.4)),
    ("Ir", Some(1.38)),
    ("Pt", None),
    ("Au", Some(0.92)),
    ("Hg", None),
    ("Tl", Some(0.9)),
    ("Pb", Some(1.75)),
    ("Bi", None),
    ("Th", Some(0.02)),
    ("U", None),
];

/// Element symbol, mass number, mole fraction within the element.
pub(crate) const ASPLUND09_ISOTOPES: &[(&str, u16, f64)] = &[
    ("H", 1, 0.99998),
    ("H", 2, 2.0e-5),
    ("He", 3, 0.00017),
    ("He", 4, 0.99983),
    ("Li", 6, 0.07589),
    ("Li", 7, 0.92411),
    ("Be", 9, 1.0),
    ("B", 10, 0.199),
    ("B", 11, 0.801),
    ("C", 12, 0.98892),
    ("C", 13, 0.01108),
    ("N", 14, 0.99774),
    ("N", 15, 0.00226),
    ("O", 16, 0.99763),
    ("O", 17, 0.00037),
    ("O", 18, 0.002),
    ("F", 19, 1.0),
    ("Ne", 20, 0.92943),
    ("Ne", 21, 0.00223),
    ("Ne", 22, 0.06834),
    ("Na", 23, 1.0),
    ("Mg", 24, 0.78992),
    ("Mg", 25, 0.10003),
    ("Mg", 26, 0.11005),
    ("Al", 27, 1.0),
    ("Si", 28, 0.9223),
    ("Si", 29, 0.04685),
    ("Si", 30, 0.03085),
    ("P", 31, 1.0),
    ("S", 32, 0.9493),
    ("S", 33, 0.0076),
    ("S", 34, 0.0429),
    ("S", 36, 0.0002),
    ("Cl", 35, 0.7576),
    ("Cl", 37, 0.2424),
    ("Ar", 36, 0.84594),
    ("Ar", 38, 0.15381),
    ("Ar", 40, 0.00025),
    ("K", 39, 0.93213),
    ("K", 40, 0.00147),
    ("K", 41, 0.0664),
    ("Ca", 40, 0.96941),
    ("Ca", 42, 0.00647),
    ("Ca", 43, 0.00135),
    ("Ca", 44, 0.02086),
    ("Ca", 46, 4.0e-5),
    ("Ca", 48, 0.00187),
    ("Sc", 45, 1.0),
    ("Ti", 46, 0.0825),
    ("Ti", 47, 0.0744),
    ("Ti", 48, 0.7372),
    ("Ti", 49, 0.0541),
    ("Ti", 50, 0.0518),
    ("V", 50, 0.0025),
    ("V", 51, 0.9975),
    ("Cr", 50, 0.04345),
    ("Cr", 52, 0.83789),
    ("Cr", 53, 0.09501),
    ("Cr", 54, 0.02365),
    ("Mn", 55, 1.0),
    ("Fe", 54, 0.05845),
    ("Fe", 56, 0.91754),
    ("Fe", 57, 0.02119),
    ("Fe", 58, 0.00282),
    ("Co", 59, 1.0),
    ("Ni", 58, 0.68076),
    ("Ni", 60, 0.26223),
    ("Ni", 61, 0.0114),
    ("Ni", 62, 0.03635),
    ("Ni", 64, 0.00926),
    ("Cu", 63, 0.6915),
    ("Cu", 65, 0.3085),
    ("Zn", 64, 0.4917),
    ("Zn", 66, 0.2773),
    ("Zn", 67, 0.0404),
    ("Zn", 68, 0.1845),
    ("Zn", 70, 0.0061),
    ("Ga", 69, 0.60108),
    ("Ga", 71, 0.39892),
    ("Ge", 70, 0.2057),
    ("Ge", 72, 0.2745),
    ("Ge", 73, 0.0775),
    ("Ge", 74, 0.365),
    ("Ge", 76, 0.0773),
    ("As", 75, 1.0),
    ("Se", 74, 0.0089),
    ("Se", 76, 0.0937),
    ("Se", 77, 0.0763),
    ("Se", 78, 0.2377),
    ("Se", 80, 0.4961),
    ("Se", 82, 0.0873),
    ("Br", 79, 0.5069),
    ("Br", 81, 0.4931),
    ("Kr", 78, 0.00347),
    ("Kr", 80, 0.02257),
    ("Kr", 82, 0.11587),
    ("Kr", 83, 0.11545),
    ("Kr", 84, 0.56901),
    ("Kr", 86, 0.17363),
    ("Rb", 85, 0.7217),
    ("Rb", 87, 0.2783),
    ("Sr", 84, 0.00558),
    ("Sr", 86, 0.09868),
    ("Sr", 87, 0.06896),
    ("Sr", 88, 0.82678),
    ("Y", 89, 1.0),
    ("Zr", 90, 0.5145),
    ("Zr", 91, 0.1122),
    ("Zr", 92, 0.1715),
    ("Zr", 94, 0.1738),
    ("Zr", 96, 0.028),
    ("Nb", 93, 1.0),
    ("Mo", 92, 0.14525),
    ("Mo", 94, 0.09151),
    ("Mo", 95, 0.15838),
    ("Mo", 96, 0.16672),
    ("Mo", 97, 0.09599),
    ("Mo", 98, 0.24391),
    ("Mo", 100, 0.09824),
    ("Ru", 96, 0.0554),
    ("Ru", 98, 0.0187),
    ("Ru", 99, 0.1276),
    ("Ru", 100, 0.126),
    ("Ru", 101, 0.1706),
    ("Ru", 102, 0.3155),
    ("Ru", 104, 0.1862),
    ("Rh", 103, 1.0),
    ("Pd", 102, 0.0102),
    ("Pd", 104, 0.1114),
    ("Pd", 105, 0.2233),
    ("Pd", 106, 0.2733),
    ("Pd", 108, 0.2646),
    ("Pd", 110, 0.1172),
    ("Ag", 107, 0.51839),
    ("Ag", 109, 0.48161),
    ("Cd", 106, 0.0125),
    ("Cd", 108, 0.0089),
    ("Cd", 110, 0.1249),
    ("Cd", 111, 0.128),
    ("Cd", 112, 0.2413),
    ("Cd", 113, 0.1222),
    ("Cd", 114, 0.2873),
    ("Cd", 116, 0.0749),
    ("In", 113, 0.0429),
    ("In", 115, 0.9571),
    ("Sn", 112, 0.0097),
    ("Sn", 114, 0.0066),
    ("Sn", 115, 0.0034),
    ("Sn", 116, 0.1454),
    ("Sn", 117, 0.0768),
    ("Sn", 118, 0.2422),
    ("Sn", 119, 0.0859),
    ("Sn", 120, 0.3258),
    ("Sn", 122, 0.0463),
    ("Sn", 124, 0.0579),
    ("Sb", 121, 0.5721),
    ("Sb", 123, 0.4279),
    ("Te", 120, 0.0009),
    ("Te", 122, 0.0255),
    ("Te", 123, 0.0089),
    ("Te", 124, 0.0474),
    ("Te", 125, 0.0707),
    ("Te", 126, 0.1884),
    ("Te", 128, 0.3174),
    ("Te", 130, 0.3408),
    ("I", 127, 1.0),
    ("Xe", 124, 0.00129),
    ("Xe", 126, 0.00113),
    ("Xe", 128, 0.02222),
    ("Xe", 129, 0.27588),
    ("Xe", 130, 0.04388),
    ("Xe", 131, 0.21678),
    ("Xe", 132, 0.26347),
    ("Xe", 134, 0.0969),
    ("Xe", 136, 0.07845),
    ("Cs", 133, 1.0),
    ("Ba", 130, 0.00106),
    ("Ba", 132, 0.00101),
    ("Ba", 134, 0.02417),
    ("Ba", 135, 0.06592),
    ("Ba", 136, 0.07854),
    ("Ba", 137, 0.11232),
    ("Ba", 138, 0.71698),
    ("La", 138, 0.00089),
    ("La", 139, 0.99911),
    ("Ce", 136, 0.00185),
    ("Ce", 138, 0.00251),
    ("Ce", 140, 0.8845),
    ("Ce", 142, 0.11114),
    ("Pr", 141, 1.0),
    ("Nd", 142, 0.27152),
    ("Nd", 143, 0.12174),
    ("Nd", 144, 0.23798),
    ("Nd", 145, 0.08293),
    ("Nd", 146, 0.17189),
    ("Nd", 148, 0.05756),
    ("Nd", 150, 0.05638),
    ("Sm", 144, 0.0307),
    ("Sm", 147, 0.1499),
    ("Sm", 148, 0.1124),
    ("Sm", 149, 0.1382),
    ("Sm", 150, 0.0738),
    ("Sm", 152, 0.2675),
    ("Sm", 154, 0.2275),
    ("Eu", 151, 0.4781),
    ("Eu", 153, 0.5219),
    ("Gd", 152, 0.002),
    ("Gd", 154, 0.0218),
    ("Gd", 155, 0.148),
    ("Gd", 156, 0.2047),
    ("Gd", 157, 0.1565),
    ("Gd", 158, 0.2484),
    ("Gd", 160, 0.2186),
    ("Tb", 159, 1.0),
    ("Dy", 156, 0.00056),
    ("Dy", 158, 0.00095),
    ("Dy", 160, 0.02329),
    ("Dy", 161, 0.18889),
    ("Dy", 162, 0.25475),
    ("Dy", 163, 0.24896),
    ("Dy", 164, 0.2826),
    ("Ho", 165, 1.0),
    ("Er", 162, 0.00139),
    ("Er", 164, 0.01601),
    ("Er", 166, 0.33503),
    ("Er", 167, 0.22869),
    ("Er", 168, 0.26978),
    ("Er", 170, 0.1491),
    ("Tm", 169, 1.0),
    ("Yb", 168, 0.00123),
    ("Yb", 170, 0.02982),
    ("Yb", 171, 0.1409),
    ("Yb", 172, 0.2168),
    ("Yb", 173, 0.16103),
    ("Yb", 174, 0.32026),
    ("Yb", 176, 0.12996),
    ("Lu", 175, 0.97401),
    ("Lu", 176, 0.02599),
    ("Hf", 174, 0.0016),
    ("Hf", 176, 0.0526),
    ("Hf", 177, 0.186),
    ("Hf", 178, 0.2728),
    ("Hf", 179, 0.1362),
    ("Hf", 180, 0.3508),
    ("Ta", 180, 0.00012),
    ("Ta", 181, 0.99988),
    ("W", 180, 0.0012),
    ("W", 182, 0.265),
    ("W", 183, 0.1431),
    ("W", 184, 0.3064),
    ("W", 186, 0.2843),
    ("Re", 185, 0.374),
    ("Re", 187, 0.626),
    ("Os", 184, 0.0002),
    ("Os", 186, 0.0159),
    ("Os", 187, 0.0196),
    ("Os", 188, 0.1324),
    ("Os", 189, 0.1615),
    ("Os", 190, 0.2626),
    ("Os", 192, 0.4078),
    ("Ir", 191, 0.373),
    ("Ir", 193, 0.627),
    ("Pt", 190, 0.00012),
    ("Pt", 192, 0.00782),
    ("Pt", 194, 0.3286),
    ("Pt", 195, 0.3378),
    ("Pt", 196, 0.2521),
    ("Pt", 198, 0.07356),
    ("Au", 197, 1.0),
    ("Hg", 196, 0.0015),
    ("Hg", 198, 0.0997),
    ("Hg", 199, 0.1687),
    ("Hg", 200, 0.231),
    ("Hg", 201, 0.1318),
    ("Hg", 202, 0.2986),
    ("Hg", 204, 0.0687),
    ("Tl", 203, 0.2952),
    ("Tl", 205, 0.7048),
    ("Pb", 204, 0.01997),
    ("Pb", 206, 0.18582),
    ("Pb", 207, 0.20563),
    ("Pb", 208, 0.58858),
    ("Bi", 209, 1.0),
    ("Th", 232, 1.0),
    ("U", 234, 2.0e-5),
    ("U", 235, 0.24286),
    ("U", 238, 0.75712),
];
