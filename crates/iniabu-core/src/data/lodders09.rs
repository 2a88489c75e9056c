//! Lodders, Palme & Gail (2009) solar-system abundances.
//!
//! Columns: element symbol, mass number, mole fraction within the element,
//! solar number abundance with N_Si = 10^6.

/// La-138 as tabulated is a rounding artifact. The value below is La-139's
/// abundance scaled by the La-138/La-139 fraction ratio:
/// 0.441 * 0.000_888_1 / 0.999_111_9.
pub(crate) const LA138_SOLAR_ABUNDANCE: f64 = 3.920_002_354_090_667e-4;

pub(crate) const LODDERS09_ISOTOPES: &[(&str, u16, f64, f64)] = &[
    ("H", 1, 0.9999806, 2.59e10),
    ("H", 2, 1.94e-5, 5.02e5),
    ("He", 3, 0.000166, 4.17e5),
    ("He", 4, 0.999834, 2.51e9),
    ("Li", 6, 0.07589, 4.22),
    ("Li", 7, 0.92411, 51.4),
    ("Be", 9, 1.0, 0.612),
    ("B", 10, 0.199, 3.74),
    ("B", 11, 0.801, 15.1),
    ("C", 12, 0.988922, 7.11e6),
    ("C", 13, 0.011078, 79700.0),
    ("N", 14, 0.997737, 2.12e6),
    ("N", 15, 0.002263, 4800.0),
    ("O", 16, 0.997628, 1.57e7),
    ("O", 17, 0.000372, 5840.0),
    ("O", 18, 0.002, 31400.0),
    ("F", 19, 1.0, 804.0),
    ("Ne", 20, 0.929431, 3.06e6),
    ("Ne", 21, 0.002228, 7330.0),
    ("Ne", 22, 0.068341, 2.25e5),
    ("Na", 23, 1.0, 57500.0),
    ("Mg", 24, 0.78992, 8.06e5),
    ("Mg", 25, 0.10003, 1.02e5),
    ("Mg", 26, 0.11005, 1.12e5),
    ("Al", 27, 1.0, 84600.0),
    ("Si", 28, 0.9223, 9.22e5),
    ("Si", 29, 0.04685, 46800.0),
    ("Si", 30, 0.03085, 30860.0),
    ("P", 31, 1.0, 8300.0),
    ("S", 32, 0.9493, 4.0e5),
    ("S", 33, 0.0076, 3200.0),
    ("S", 34, 0.0429, 18100.0),
    ("S", 36, 0.0002, 84.2),
    ("Cl", 35, 0.7576, 3920.0),
    ("Cl", 37, 0.2424, 1250.0),
    ("Ar", 36, 0.845946, 78100.0),
    ("Ar", 38, 0.153808, 14200.0),
    ("Ar", 40, 0.000246, 22.7),
    ("K", 39, 0.932132, 3500.0),
    ("K", 40, 0.001472, 5.53),
    ("K", 41, 0.066396, 250.0),
    ("Ca", 40, 0.96941, 58600.0),
    ("Ca", 42, 0.00647, 391.0),
    ("Ca", 43, 0.00135, 81.5),
    ("Ca", 44, 0.02086, 1260.0),
    ("Ca", 46, 4.0e-5, 2.42),
    ("Ca", 48, 0.00187, 113.0),
    ("Sc", 45, 1.0, 34.4),
    ("Ti", 46, 0.0825, 204.0),
    ("Ti", 47, 0.0744, 184.0),
    ("Ti", 48, 0.7372, 1820.0),
    ("Ti", 49, 0.0541, 134.0),
    ("Ti", 50, 0.0518, 128.0),
    ("V", 50, 0.0025, 0.715),
    ("V", 51, 0.9975, 285.0),
    ("Cr", 50, 0.04345, 569.0),
    ("Cr", 52, 0.83789, 11000.0),
    ("Cr", 53, 0.09501, 1240.0),
    ("Cr", 54, 0.02365, 310.0),
    ("Mn", 55, 1.0, 9220.0),
    ("Fe", 54, 0.05845, 49600.0),
    ("Fe", 56, 0.91754, 7.78e5),
    ("Fe", 57, 0.021191, 18000.0),
    ("Fe", 58, 0.002819, 2390.0),
    ("Co", 59, 1.0, 2350.0),
    ("Ni", 58, 0.680769, 33400.0),
    ("Ni", 60, 0.262231, 12900.0),
    ("Ni", 61, 0.011399, 560.0),
    ("Ni", 62, 0.036345, 1780.0),
    ("Ni", 64, 0.009256, 454.0),
    ("Cu", 63, 0.6915, 368.0),
    ("Cu", 65, 0.3085, 164.0),
    ("Zn", 64, 0.4917, 605.0),
    ("Zn", 66, 0.2773, 341.0),
    ("Zn", 67, 0.0404, 49.7),
    ("Zn", 68, 0.1845, 227.0),
    ("Zn", 70, 0.0061, 7.5),
    ("Ga", 69, 0.60108, 22.2),
    ("Ga", 71, 0.39892, 14.7),
    ("Ge", 70, 0.2057, 23.7),
    ("Ge", 72, 0.2745, 31.6),
    ("Ge", 73, 0.0775, 8.91),
    ("Ge", 74, 0.365, 42.0),
    ("Ge", 76, 0.0773, 8.89),
    ("As", 75, 1.0, 6.1),
    ("Se", 74, 0.0089, 0.598),
    ("Se", 76, 0.0937, 6.3),
    ("Se", 77, 0.0763, 5.13),
    ("Se", 78, 0.2377, 16.0),
    ("Se", 80, 0.4961, 33.3),
    ("Se", 82, 0.0873, 5.87),
    ("Br", 79, 0.5069, 5.42),
    ("Br", 81, 0.4931, 5.28),
    ("Kr", 78, 0.003469, 0.191),
    ("Kr", 80, 0.022571, 1.25),
    ("Kr", 82, 0.115867, 6.4),
    ("Kr", 83, 0.115447, 6.37),
    ("Kr", 84, 0.569017, 31.4),
    ("Kr", 86, 0.173629, 9.58),
    ("Rb", 85, 0.7217, 5.02),
    ("Rb", 87, 0.2783, 1.94),
    ("Sr", 84, 0.00558, 0.132),
    ("Sr", 86, 0.098678, 2.33),
    ("Sr", 87, 0.068961, 1.63),
    ("Sr", 88, 0.826781, 19.5),
    ("Y", 89, 1.0, 4.61),
    ("Zr", 90, 0.5145, 5.51),
    ("Zr", 91, 0.1122, 1.2),
    ("Zr", 92, 0.1715, 1.84),
    ("Zr", 94, 0.1738, 1.86),
    ("Zr", 96, 0.028, 0.3),
    ("Nb", 93, 1.0, 0.776),
    ("Mo", 92, 0.14525, 0.37),
    ("Mo", 94, 0.09151, 0.233),
    ("Mo", 95, 0.15838, 0.404),
    ("Mo", 96, 0.16672, 0.425),
    ("Mo", 97, 0.09599, 0.245),
    ("Mo", 98, 0.24391, 0.622),
    ("Mo", 100, 0.09824, 0.251),
    ("Ru", 96, 0.0554, 0.103),
    ("Ru", 98, 0.0187, 0.0348),
    ("Ru", 99, 0.1276, 0.237),
    ("Ru", 100, 0.126, 0.234),
    ("Ru", 101, 0.1706, 0.317),
    ("Ru", 102, 0.3155, 0.587),
    ("Ru", 104, 0.1862, 0.346),
    ("Rh", 103, 1.0, 0.344),
    ("Pd", 102, 0.0102, 0.0142),
    ("Pd", 104, 0.1114, 0.155),
    ("Pd", 105, 0.2233, 0.31),
    ("Pd", 106, 0.2733, 0.38),
    ("Pd", 108, 0.2646, 0.368),
    ("Pd", 110, 0.1172, 0.163),
    ("Ag", 107, 0.51839, 0.252),
    ("Ag", 109, 0.48161, 0.234),
    ("Cd", 106, 0.0125, 0.0201),
    ("Cd", 108, 0.0089, 0.0143),
    ("Cd", 110, 0.1249, 0.201),
    ("Cd", 111, 0.128, 0.206),
    ("Cd", 112, 0.2413, 0.388),
    ("Cd", 113, 0.1222, 0.197),
    ("Cd", 114, 0.2873, 0.463),
    ("Cd", 116, 0.0749, 0.121),
    ("In", 113, 0.0429, 0.00789),
    ("In", 115, 0.9571, 0.176),
    ("Sn", 112, 0.0097, 0.0371),
    ("Sn", 114, 0.0066, 0.0252),
    ("Sn", 115, 0.0034, 0.013),
    ("Sn", 116, 0.1454, 0.555),
    ("Sn", 117, 0.0768, 0.293),
    ("Sn", 118, 0.2422, 0.925),
    ("Sn", 119, 0.0859, 0.328),
    ("Sn", 120, 0.3258, 1.24),
    ("Sn", 122, 0.0463, 0.177),
    ("Sn", 124, 0.0579, 0.221),
    ("Sb", 121, 0.5721, 0.177),
    ("Sb", 123, 0.4279, 0.132),
    ("Te", 120, 0.0009, 0.00433),
    ("Te", 122, 0.0255, 0.123),
    ("Te", 123, 0.0089, 0.0428),
    ("Te", 124, 0.0474, 0.228),
    ("Te", 125, 0.0707, 0.34),
    ("Te", 126, 0.1884, 0.906),
    ("Te", 128, 0.3174, 1.53),
    ("Te", 130, 0.3408, 1.64),
    ("I", 127, 1.0, 0.9),
    ("Xe", 124, 0.001294, 0.00697),
    ("Xe", 126, 0.001134, 0.00611),
    ("Xe", 128, 0.022216, 0.12),
    ("Xe", 129, 0.275873, 1.49),
    ("Xe", 130, 0.043884, 0.237),
    ("Xe", 131, 0.21678, 1.17),
    ("Xe", 132, 0.263469, 1.42),
    ("Xe", 134, 0.096899, 0.522),
    ("Xe", 136, 0.078451, 0.423),
    ("Cs", 133, 1.0, 0.37),
    ("Ba", 130, 0.00106, 0.00461),
    ("Ba", 132, 0.00101, 0.00439),
    ("Ba", 134, 0.02417, 0.105),
    ("Ba", 135, 0.06592, 0.287),
    ("Ba", 136, 0.07854, 0.342),
    ("Ba", 137, 0.11232, 0.489),
    ("Ba", 138, 0.71698, 3.12),
    ("La", 138, 0.0008881, LA138_SOLAR_ABUNDANCE),
    ("La", 139, 0.9991119, 0.441),
    ("Ce", 136, 0.00185, 0.00216),
    ("Ce", 138, 0.00251, 0.00294),
    ("Ce", 140, 0.8845, 1.03),
    ("Ce", 142, 0.11114, 0.13),
    ("Pr", 141, 1.0, 0.174),
    ("Nd", 142, 0.27152, 0.227),
    ("Nd", 143, 0.12174, 0.102),
    ("Nd", 144, 0.23798, 0.199),
    ("Nd", 145, 0.08293, 0.0693),
    ("Nd", 146, 0.17189, 0.144),
    ("Nd", 148, 0.05756, 0.0481),
    ("Nd", 150, 0.05638, 0.0471),
    ("Sm", 144, 0.0307, 0.00801),
    ("Sm", 147, 0.1499, 0.0391),
    ("Sm", 148, 0.1124, 0.0293),
    ("Sm", 149, 0.1382, 0.0361),
    ("Sm", 150, 0.0738, 0.0193),
    ("Sm", 152, 0.2675, 0.0698),
    ("Sm", 154, 0.2275, 0.0594),
    ("Eu", 151, 0.4781, 0.0465),
    ("Eu", 153, 0.5219, 0.0507),
    ("Gd", 152, 0.002, 0.000662),
    ("Gd", 154, 0.0218, 0.00722),
    ("Gd", 155, 0.148, 0.049),
    ("Gd", 156, 0.2047, 0.0678),
    ("Gd", 157, 0.1565, 0.0518),
    ("Gd", 158, 0.2484, 0.0822),
    ("Gd", 160, 0.2186, 0.0724),
    ("Tb", 159, 1.0, 0.0589),
    ("Dy", 156, 0.00056, 0.000223),
    ("Dy", 158, 0.00095, 0.000378),
    ("Dy", 160, 0.02329, 0.00927),
    ("Dy", 161, 0.18889, 0.0752),
    ("Dy", 162, 0.25475, 0.101),
    ("Dy", 163, 0.24896, 0.0991),
    ("Dy", 164, 0.2826, 0.112),
    ("Ho", 165, 1.0, 0.0875),
    ("Er", 162, 0.00139, 0.000352),
    ("Er", 164, 0.01601, 0.00405),
    ("Er", 166, 0.33503, 0.0848),
    ("Er", 167, 0.22869, 0.0579),
    ("Er", 168, 0.26978, 0.0683),
    ("Er", 170, 0.1491, 0.0377),
    ("Tm", 169, 1.0, 0.0386),
    ("Yb", 168, 0.00123, 0.000299),
    ("Yb", 170, 0.02982, 0.00725),
    ("Yb", 171, 0.1409, 0.0342),
    ("Yb", 172, 0.2168, 0.0527),
    ("Yb", 173, 0.16103, 0.0391),
    ("Yb", 174, 0.32026, 0.0778),
    ("Yb", 176, 0.12996, 0.0316),
    ("Lu", 175, 0.97401, 0.0347),
    ("Lu", 176, 0.02599, 0.000925),
    ("Hf", 174, 0.0016, 0.000246),
    ("Hf", 176, 0.0526, 0.0081),
    ("Hf", 177, 0.186, 0.0286),
    ("Hf", 178, 0.2728, 0.042),
    ("Hf", 179, 0.1362, 0.021),
    ("Hf", 180, 0.3508, 0.054),
    ("Ta", 180, 0.0001201, 2.49e-6),
    ("Ta", 181, 0.9998799, 0.0207),
    ("W", 180, 0.0012, 0.00016),
    ("W", 182, 0.265, 0.0352),
    ("W", 183, 0.1431, 0.019),
    ("W", 184, 0.3064, 0.0408),
    ("W", 186, 0.2843, 0.0378),
    ("Re", 185, 0.374, 0.0193),
    ("Re", 187, 0.626, 0.0324),
    ("Os", 184, 0.0002, 0.000135),
    ("Os", 186, 0.0159, 0.0107),
    ("Os", 187, 0.0196, 0.0132),
    ("Os", 188, 0.1324, 0.0894),
    ("Os", 189, 0.1615, 0.109),
    ("Os", 190, 0.2626, 0.177),
    ("Os", 192, 0.4078, 0.275),
    ("Ir", 191, 0.373, 0.247),
    ("Ir", 193, 0.627, 0.414),
    ("Pt", 190, 0.00012, 0.000161),
    ("Pt", 192, 0.00782, 0.0105),
    ("Pt", 194, 0.3286, 0.44),
    ("Pt", 195, 0.3378, 0.453),
    ("Pt", 196, 0.2521, 0.338),
    ("Pt", 198, 0.07356, 0.0986),
    ("Au", 197, 1.0, 0.187),
    ("Hg", 196, 0.0015, 0.00051),
    ("Hg", 198, 0.0997, 0.0339),
    ("Hg", 199, 0.1687, 0.0574),
    ("Hg", 200, 0.231, 0.0785),
    ("Hg", 201, 0.1318, 0.0448),
    ("Hg", 202, 0.2986, 0.102),
    ("Hg", 204, 0.0687, 0.0234),
    ("Tl", 203, 0.2952, 0.0543),
    ("Tl", 205, 0.7048, 0.13),
    ("Pb", 204, 0.01997, 0.0651),
    ("Pb", 206, 0.18582, 0.606),
    ("Pb", 207, 0.20563, 0.67),
    ("Pb", 208, 0.58858, 1.92),
    ("Bi", 209, 1.0, 0.138),
    ("Th", 232, 1.0, 0.044),
    ("U", 234, 2.0e-5, 4.76e-7),
    ("U", 235, 0.24286, 0.00578),
    ("U", 238, 0.75712, 0.018),
];
