//! NIST (2015) isotopic compositions of the elements.
//!
//! Columns: element symbol, mass number, isotope mass in u, terrestrial mole
//! fraction within the element. Radioactive isotopes without a natural
//! composition are listed with a zero fraction so that they stay addressable.
//! The masses are shared by every bundled dataset.

pub(crate) const NIST15_ISOTOPES: &[(&str, u16, f64, f64)] = &[
    ("H", 1, 1.00782503223, 0.999885),
    ("H", 2, 2.01410177812, 0.000115),
    ("H", 3, 3.0160492779, 0.0),
    ("He", 3, 3.0160293201, 1.34e-6),
    ("He", 4, 4.00260325413, 0.99999866),
    ("Li", 6, 6.0151228874, 0.0759),
    ("Li", 7, 7.0160034366, 0.9241),
    ("Be", 9, 9.012183065, 1.0),
    ("B", 10, 10.01293695, 0.199),
    ("B", 11, 11.00930536, 0.801),
    ("C", 12, 12.0, 0.9893),
    ("C", 13, 13.00335483507, 0.0107),
    ("N", 14, 14.00307400443, 0.99636),
    ("N", 15, 15.00010889888, 0.00364),
    ("O", 16, 15.99491461957, 0.99757),
    ("O", 17, 16.9991317565, 0.00038),
    ("O", 18, 17.99915961286, 0.00205),
    ("F", 19, 18.99840316273, 1.0),
    ("Ne", 20, 19.9924401762, 0.9048),
    ("Ne", 21, 20.993846685, 0.0027),
    ("Ne", 22, 21.991385114, 0.0925),
    ("Na", 23, 22.989769282, 1.0),
    ("Mg", 24, 23.985041697, 0.7899),
    ("Mg", 25, 24.985836976, 0.1),
    ("Mg", 26, 25.982592968, 0.1101),
    ("Al", 27, 26.98153853, 1.0),
    ("Si", 28, 27.97692653465, 0.92223),
    ("Si", 29, 28.9764946649, 0.04685),
    ("Si", 30, 29.973770136, 0.03092),
    ("P", 31, 30.97376199842, 1.0),
    ("S", 32, 31.9720711744, 0.9499),
    ("S", 33, 32.9714589098, 0.0075),
    ("S", 34, 33.967867004, 0.0425),
    ("S", 36, 35.96708071, 0.0001),
    ("Cl", 35, 34.968852682, 0.7576),
    ("Cl", 37, 36.965902602, 0.2424),
    ("Ar", 36, 35.967545105, 0.003336),
    ("Ar", 38, 37.96273211, 0.000629),
    ("Ar", 40, 39.9623831237, 0.996035),
    ("K", 39, 38.9637064864, 0.932581),
    ("K", 40, 39.963998166, 0.000117),
    ("K", 41, 40.9618252579, 0.067302),
    ("Ca", 40, 39.962590863, 0.96941),
    ("Ca", 42, 41.95861783, 0.00647),
    ("Ca", 43, 42.95876644, 0.00135),
    ("Ca", 44, 43.95548156, 0.02086),
    ("Ca", 46, 45.953689, 4.0e-5),
    ("Ca", 48, 47.95252276, 0.00187),
    ("Sc", 45, 44.95590828, 1.0),
    ("Ti", 46, 45.95262772, 0.0825),
    ("Ti", 47, 46.95175879, 0.0744),
    ("Ti", 48, 47.94794198, 0.7372),
    ("Ti", 49, 48.94786568, 0.0541),
    ("Ti", 50, 49.94478689, 0.0518),
    ("V", 50, 49.94715601, 0.0025),
    ("V", 51, 50.94395704, 0.9975),
    ("Cr", 50, 49.94604183, 0.04345),
    ("Cr", 52, 51.94050623, 0.83789),
    ("Cr", 53, 52.94064815, 0.09501),
    ("Cr", 54, 53.93887916, 0.02365),
    ("Mn", 55, 54.93804391, 1.0),
    ("Fe", 54, 53.93960899, 0.05845),
    ("Fe", 56, 55.93493633, 0.91754),
    ("Fe", 57, 56.93539284, 0.02119),
    ("Fe", 58, 57.93327443, 0.00282),
    ("Co", 59, 58.93319429, 1.0),
    ("Ni", 58, 57.93534241, 0.68077),
    ("Ni", 60, 59.93078588, 0.26223),
    ("Ni", 61, 60.93105557, 0.011399),
    ("Ni", 62, 61.92834537, 0.036346),
    ("Ni", 64, 63.92796682, 0.009255),
    ("Cu", 63, 62.92959772, 0.6915),
    ("Cu", 65, 64.9277897, 0.3085),
    ("Zn", 64, 63.92914201, 0.4917),
    ("Zn", 66, 65.92603381, 0.2773),
    ("Zn", 67, 66.92712775, 0.0404),
    ("Zn", 68, 67.92484455, 0.1845),
    ("Zn", 70, 69.9253192, 0.0061),
    ("Ga", 69, 68.9255735, 0.60108),
    ("Ga", 71, 70.92470258, 0.39892),
    ("Ge", 70, 69.92424875, 0.2057),
    ("Ge", 72, 71.922075826, 0.2745),
    ("Ge", 73, 72.923458956, 0.0775),
    ("Ge", 74, 73.921177761, 0.365),
    ("Ge", 76, 75.921402726, 0.0773),
    ("As", 75, 74.92159457, 1.0),
    ("Se", 74, 73.922475934, 0.0089),
    ("Se", 76, 75.919213704, 0.0937),
    ("Se", 77, 76.919914154, 0.0763),
    ("Se", 78, 77.91730928, 0.2377),
    ("Se", 80, 79.9165218, 0.4961),
    ("Se", 82, 81.9166995, 0.0873),
    ("Br", 79, 78.9183376, 0.5069),
    ("Br", 81, 80.9162897, 0.4931),
    ("Kr", 78, 77.92036494, 0.00355),
    ("Kr", 80, 79.91637808, 0.02286),
    ("Kr", 82, 81.91348273, 0.11593),
    ("Kr", 83, 82.91412716, 0.115),
    ("Kr", 84, 83.9114977282, 0.56987),
    ("Kr", 86, 85.9106106269, 0.17279),
    ("Rb", 85, 84.9117897379, 0.7217),
    ("Rb", 87, 86.909180531, 0.2783),
    ("Sr", 84, 83.9134191, 0.0056),
    ("Sr", 86, 85.9092606, 0.0986),
    ("Sr", 87, 86.9088775, 0.07),
    ("Sr", 88, 87.9056125, 0.8258),
    ("Y", 89, 88.9058403, 1.0),
    ("Zr", 90, 89.9046977, 0.5145),
    ("Zr", 91, 90.9056396, 0.1122),
    ("Zr", 92, 91.9050347, 0.1715),
    ("Zr", 94, 93.9063108, 0.1738),
    ("Zr", 96, 95.9082714, 0.028),
    ("Nb", 93, 92.906373, 1.0),
    ("Mo", 92, 91.90680796, 0.1453),
    ("Mo", 94, 93.9050849, 0.0915),
    ("Mo", 95, 94.90583877, 0.1584),
    ("Mo", 96, 95.90467612, 0.1667),
    ("Mo", 97, 96.90601812, 0.096),
    ("Mo", 98, 97.90540482, 0.2439),
    ("Mo", 100, 99.9074718, 0.0982),
    ("Tc", 97, 96.9063667, 0.0),
    ("Tc", 98, 97.9072124, 0.0),
    ("Tc", 99, 98.9062508, 0.0),
    ("Ru", 96, 95.90759025, 0.0554),
    ("Ru", 98, 97.9052868, 0.0187),
    ("Ru", 99, 98.9059341, 0.1276),
    ("Ru", 100, 99.9042143, 0.126),
    ("Ru", 101, 100.9055769, 0.1706),
    ("Ru", 102, 101.9043441, 0.3155),
    ("Ru", 104, 103.9054275, 0.1862),
    ("Rh", 103, 102.905498, 1.0),
    ("Pd", 102, 101.9056022, 0.0102),
    ("Pd", 104, 103.9040305, 0.1114),
    ("Pd", 105, 104.9050796, 0.2233),
    ("Pd", 106, 105.9034804, 0.2733),
    ("Pd", 108, 107.9038916, 0.2646),
    ("Pd", 110, 109.9051722, 0.1172),
    ("Ag", 107, 106.9050916, 0.51839),
    ("Ag", 109, 108.9047553, 0.48161),
    ("Cd", 106, 105.9064599, 0.0125),
    ("Cd", 108, 107.9041834, 0.0089),
    ("Cd", 110, 109.90300661, 0.1249),
    ("Cd", 111, 110.90418287, 0.128),
    ("Cd", 112, 111.90276287, 0.2413),
    ("Cd", 113, 112.90440813, 0.1222),
    ("Cd", 114, 113.90336509, 0.2873),
    ("Cd", 116, 115.90476315, 0.0749),
    ("In", 113, 112.90406184, 0.0429),
    ("In", 115, 114.903878776, 0.9571),
    ("Sn", 112, 111.90482387, 0.0097),
    ("Sn", 114, 113.9027827, 0.0066),
    ("Sn", 115, 114.903344699, 0.0034),
    ("Sn", 116, 115.9017428, 0.1454),
    ("Sn", 117, 116.90295398, 0.0768),
    ("Sn", 118, 117.90160657, 0.2422),
    ("Sn", 119, 118.90331117, 0.0859),
    ("Sn", 120, 119.90220163, 0.3258),
    ("Sn", 122, 121.9034438, 0.0463),
    ("Sn", 124, 123.9052766, 0.0579),
    ("Sb", 121, 120.903812, 0.5721),
    ("Sb", 123, 122.9042132, 0.4279),
    ("Te", 120, 119.9040593, 0.0009),
    ("Te", 122, 121.9030435, 0.0255),
    ("Te", 123, 122.9042698, 0.0089),
    ("Te", 124, 123.9028171, 0.0474),
    ("Te", 125, 124.9044299, 0.0707),
    ("Te", 126, 125.9033109, 0.1884),
    ("Te", 128, 127.90446128, 0.3174),
    ("Te", 130, 129.906222748, 0.3408),
    ("I", 127, 126.9044719, 1.0),
    ("Xe", 124, 123.905892, 0.000952),
    ("Xe", 126, 125.9042983, 0.00089),
    ("Xe", 128, 127.903531, 0.019102),
    ("Xe", 129, 128.9047808611, 0.264006),
    ("Xe", 130, 129.903509349, 0.04071),
    ("Xe", 131, 130.90508406, 0.212324),
    ("Xe", 132, 131.9041550856, 0.269086),
    ("Xe", 134, 133.90539466, 0.104357),
    ("Xe", 136, 135.907214484, 0.088573),
    ("Cs", 133, 132.905451961, 1.0),
    ("Ba", 130, 129.9063207, 0.00106),
    ("Ba", 132, 131.9050611, 0.00101),
    ("Ba", 134, 133.90450818, 0.02417),
    ("Ba", 135, 134.90568838, 0.06592),
    ("Ba", 136, 135.90457573, 0.07854),
    ("Ba", 137, 136.90582714, 0.11232),
    ("Ba", 138, 137.905247, 0.71698),
    ("La", 138, 137.9071149, 0.0008881),
    ("La", 139, 138.9063563, 0.9991119),
    ("Ce", 136, 135.90712921, 0.00185),
    ("Ce", 138, 137.905991, 0.00251),
    ("Ce", 140, 139.9054431, 0.8845),
    ("Ce", 142, 141.9092504, 0.11114),
    ("Pr", 141, 140.9076576, 1.0),
    ("Nd", 142, 141.907729, 0.27152),
    ("Nd", 143, 142.90982, 0.12174),
    ("Nd", 144, 143.910093, 0.23798),
    ("Nd", 145, 144.9125793, 0.08293),
    ("Nd", 146, 145.9131226, 0.17189),
    ("Nd", 148, 147.9168993, 0.05756),
    ("Nd", 150, 149.9209022, 0.05638),
    ("Pm", 145, 144.9127559, 0.0),
    ("Pm", 147, 146.915145, 0.0),
    ("Sm", 144, 143.9120065, 0.0307),
    ("Sm", 147, 146.9149044, 0.1499),
    ("Sm", 148, 147.9148292, 0.1124),
    ("Sm", 149, 148.9171921, 0.1382),
    ("Sm", 150, 149.9172829, 0.0738),
    ("Sm", 152, 151.9197397, 0.2675),
    ("Sm", 154, 153.9222169, 0.2275),
    ("Eu", 151, 150.9198578, 0.4781),
    ("Eu", 153, 152.921238, 0.5219),
    ("Gd", 152, 151.9197995, 0.002),
    ("Gd", 154, 153.9208741, 0.0218),
    ("Gd", 155, 154.9226305, 0.148),
    ("Gd", 156, 155.9221312, 0.2047),
    ("Gd", 157, 156.9239686, 0.1565),
    ("Gd", 158, 157.9241123, 0.2484),
    ("Gd", 160, 159.9270624, 0.2186),
    ("Tb", 159, 158.9253547, 1.0),
    ("Dy", 156, 155.9242847, 0.00056),
    ("Dy", 158, 157.9244159, 0.00095),
    ("Dy", 160, 159.9252046, 0.02329),
    ("Dy", 161, 160.9269405, 0.18889),
    ("Dy", 162, 161.9268056, 0.25475),
    ("Dy", 163, 162.9287383, 0.24896),
    ("Dy", 164, 163.9291819, 0.2826),
    ("Ho", 165, 164.9303288, 1.0),
    ("Er", 162, 161.9287884, 0.00139),
    ("Er", 164, 163.9292088, 0.01601),
    ("Er", 166, 165.9302995, 0.33503),
    ("Er", 167, 166.9320546, 0.22869),
    ("Er", 168, 167.9323767, 0.26978),
    ("Er", 170, 169.9354702, 0.1491),
    ("Tm", 169, 168.9342179, 1.0),
    ("Yb", 168, 167.9338896, 0.00123),
    ("Yb", 170, 169.9347664, 0.02982),
    ("Yb", 171, 170.9363302, 0.1409),
    ("Yb", 172, 171.9363859, 0.2168),
    ("Yb", 173, 172.9382151, 0.16103),
    ("Yb", 174, 173.9388664, 0.32026),
    ("Yb", 176, 175.9425764, 0.12996),
    ("Lu", 175, 174.9407752, 0.97401),
    ("Lu", 176, 175.9426897, 0.02599),
    ("Hf", 174, 173.9400461, 0.0016),
    ("Hf", 176, 175.9414076, 0.0526),
    ("Hf", 177, 176.9432277, 0.186),
    ("Hf", 178, 177.9437058, 0.2728),
    ("Hf", 179, 178.9458232, 0.1362),
    ("Hf", 180, 179.946557, 0.3508),
    ("Ta", 180, 179.9474648, 0.0001201),
    ("Ta", 181, 180.9479958, 0.9998799),
    ("W", 180, 179.9467108, 0.0012),
    ("W", 182, 181.94820394, 0.265),
    ("W", 183, 182.95022275, 0.1431),
    ("W", 184, 183.95093092, 0.3064),
    ("W", 186, 185.9543628, 0.2843),
    ("Re", 185, 184.9529545, 0.374),
    ("Re", 187, 186.9557501, 0.626),
    ("Os", 184, 183.9524885, 0.0002),
    ("Os", 186, 185.953835, 0.0159),
    ("Os", 187, 186.9557474, 0.0196),
    ("Os", 188, 187.9558352, 0.1324),
    ("Os", 189, 188.9581442, 0.1615),
    ("Os", 190, 189.9584437, 0.2626),
    ("Os", 192, 191.961477, 0.4078),
    ("Ir", 191, 190.9605893, 0.373),
    ("Ir", 193, 192.9629216, 0.627),
    ("Pt", 190, 189.9599297, 0.00012),
    ("Pt", 192, 191.9610387, 0.00782),
    ("Pt", 194, 193.9626809, 0.3286),
    ("Pt", 195, 194.9647917, 0.3378),
    ("Pt", 196, 195.96495209, 0.2521),
    ("Pt", 198, 197.9678949, 0.07356),
    ("Au", 197, 196.96656879, 1.0),
    ("Hg", 196, 195.9658326, 0.0015),
    ("Hg", 198, 197.9667686, 0.0997),
    ("Hg", 199, 198.96828064, 0.1687),
    ("Hg", 200, 199.96832659, 0.231),
    ("Hg", 201, 200.97030284, 0.1318),
    ("Hg", 202, 201.9706434, 0.2986),
    ("Hg", 204, 203.97349398, 0.0687),
    ("Tl", 203, 202.9723446, 0.2952),
    ("Tl", 205, 204.9744278, 0.7048),
    ("Pb", 204, 203.973044, 0.014),
    ("Pb", 206, 205.9744657, 0.241),
    ("Pb", 207, 206.9758973, 0.221),
    ("Pb", 208, 207.9766525, 0.524),
    ("Bi", 209, 208.9803991, 1.0),
    ("Th", 232, 232.0380558, 1.0),
    ("U", 234, 234.0409523, 5.4e-5),
    ("U", 235, 235.0439301, 0.007204),
    ("U", 238, 238.0507884, 0.992742),
];
