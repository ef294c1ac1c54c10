use super::Category::{self, *};

/// `(atomic number, symbol, name, standard atomic weight, category)`.
///
/// Synthetic elements carry the mass number of their most stable isotope.
pub(super) const ELEMENTS: [(u8, &str, &str, f64, Category); 118] = [
    (1, "H", "Hydrogen", 1.008, Nonmetal),
    (2, "He", "Helium", 4.0026, NobleGas),
    (3, "Li", "Lithium", 6.94, AlkaliMetal),
    (4, "Be", "Beryllium", 9.0122, AlkalineEarthMetal),
    (5, "B", "Boron", 10.81, Metalloid),
    (6, "C", "Carbon", 12.011, Nonmetal),
    (7, "N", "Nitrogen", 14.007, Nonmetal),
    (8, "O", "Oxygen", 15.999, Nonmetal),
    (9, "F", "Fluorine", 18.998, Halogen),
    (10, "Ne", "Neon", 20.180, NobleGas),
    (11, "Na", "Sodium", 22.990, AlkaliMetal),
    (12, "Mg", "Magnesium", 24.305, AlkalineEarthMetal),
    (13, "Al", "Aluminium", 26.982, PostTransitionMetal),
    (14, "Si", "Silicon", 28.085, Metalloid),
    (15, "P", "Phosphorus", 30.974, Nonmetal),
    (16, "S", "Sulfur", 32.06, Nonmetal),
    (17, "Cl", "Chlorine", 35.45, Halogen),
    (18, "Ar", "Argon", 39.948, NobleGas),
    (19, "K", "Potassium", 39.098, AlkaliMetal),
    (20, "Ca", "Calcium", 40.078, AlkalineEarthMetal),
    (21, "Sc", "Scandium", 44.956, TransitionMetal),
    (22, "Ti", "Titanium", 47.867, TransitionMetal),
    (23, "V", "Vanadium", 50.942, TransitionMetal),
    (24, "Cr", "Chromium", 51.996, TransitionMetal),
    (25, "Mn", "Manganese", 54.938, TransitionMetal),
    (26, "Fe", "Iron", 55.845, TransitionMetal),
    (27, "Co", "Cobalt", 58.933, TransitionMetal),
    (28, "Ni", "Nickel", 58.693, TransitionMetal),
    (29, "Cu", "Copper", 63.546, TransitionMetal),
    (30, "Zn", "Zinc", 65.38, TransitionMetal),
    (31, "Ga", "Gallium", 69.723, PostTransitionMetal),
    (32, "Ge", "Germanium", 72.630, Metalloid),
    (33, "As", "Arsenic", 74.922, Metalloid),
    (34, "Se", "Selenium", 78.971, Nonmetal),
    (35, "Br", "Bromine", 79.904, Halogen),
    (36, "Kr", "Krypton", 83.798, NobleGas),
    (37, "Rb", "Rubidium", 85.468, AlkaliMetal),
    (38, "Sr", "Strontium", 87.62, AlkalineEarthMetal),
    (39, "Y", "Yttrium", 88.906, TransitionMetal),
    (40, "Zr", "Zirconium", 91.224, TransitionMetal),
    (41, "Nb", "Niobium", 92.906, TransitionMetal),
    (42, "Mo", "Molybdenum", 95.95, TransitionMetal),
    (43, "Tc", "Technetium", 98.0, TransitionMetal),
    (44, "Ru", "Ruthenium", 101.07, TransitionMetal),
    (45, "Rh", "Rhodium", 102.91, TransitionMetal),
    (46, "Pd", "Palladium", 106.42, TransitionMetal),
    (47, "Ag", "Silver", 107.87, TransitionMetal),
    (48, "Cd", "Cadmium", 112.41, TransitionMetal),
    (49, "In", "Indium", 114.82, PostTransitionMetal),
    (50, "Sn", "Tin", 118.71, PostTransitionMetal),
    (51, "Sb", "Antimony", 121.76, Metalloid),
    (52, "Te", "Tellurium", 127.60, Metalloid),
    (53, "I", "Iodine", 126.90, Halogen),
    (54, "Xe", "Xenon", 131.29, NobleGas),
    (55, "Cs", "Caesium", 132.91, AlkaliMetal),
    (56, "Ba", "Barium", 137.33, AlkalineEarthMetal),
    (57, "La", "Lanthanum", 138.91, Lanthanide),
    (58, "Ce", "Cerium", 140.12, Lanthanide),
    (59, "Pr", "Praseodymium", 140.91, Lanthanide),
    (60, "Nd", "Neodymium", 144.24, Lanthanide),
    (61, "Pm", "Promethium", 145.0, Lanthanide),
    (62, "Sm", "Samarium", 150.36, Lanthanide),
    (63, "Eu", "Europium", 151.96, Lanthanide),
    (64, "Gd", "Gadolinium", 157.25, Lanthanide),
    (65, "Tb", "Terbium", 158.93, Lanthanide),
    (66, "Dy", "Dysprosium", 162.50, Lanthanide),
    (67, "Ho", "Holmium", 164.93, Lanthanide),
    (68, "Er", "Erbium", 167.26, Lanthanide),
    (69, "Tm", "Thulium", 168.93, Lanthanide),
    (70, "Yb", "Ytterbium", 173.05, Lanthanide),
    (71, "Lu", "Lutetium", 174.97, Lanthanide),
    (72, "Hf", "Hafnium", 178.49, TransitionMetal),
    (73, "Ta", "Tantalum", 180.95, TransitionMetal),
    (74, "W", "Tungsten", 183.84, TransitionMetal),
    (75, "Re", "Rhenium", 186.21, TransitionMetal),
    (76, "Os", "Osmium", 190.23, TransitionMetal),
    (77, "Ir", "Iridium", 192.22, TransitionMetal),
    (78, "Pt", "Platinum", 195.08, TransitionMetal),
    (79, "Au", "Gold", 196.97, TransitionMetal),
    (80, "Hg", "Mercury", 200.59, TransitionMetal),
    (81, "Tl", "Thallium", 204.38, PostTransitionMetal),
    (82, "Pb", "Lead", 207.2, PostTransitionMetal),
    (83, "Bi", "Bismuth", 208.98, PostTransitionMetal),
    (84, "Po", "Polonium", 209.0, PostTransitionMetal),
    (85, "At", "Astatine", 210.0, Halogen),
    (86, "Rn", "Radon", 222.0, NobleGas),
    (87, "Fr", "Francium", 223.0, AlkaliMetal),
    (88, "Ra", "Radium", 226.0, AlkalineEarthMetal),
    (89, "Ac", "Actinium", 227.0, Actinide),
    (90, "Th", "Thorium", 232.04, Actinide),
    (91, "Pa", "Protactinium", 231.04, Actinide),
    (92, "U", "Uranium", 238.03, Actinide),
    (93, "Np", "Neptunium", 237.0, Actinide),
    (94, "Pu", "Plutonium", 244.0, Actinide),
    (95, "Am", "Americium", 243.0, Actinide),
    (96, "Cm", "Curium", 247.0, Actinide),
    (97, "Bk", "Berkelium", 247.0, Actinide),
    (98, "Cf", "Californium", 251.0, Actinide),
    (99, "Es", "Einsteinium", 252.0, Actinide),
    (100, "Fm", "Fermium", 257.0, Actinide),
    (101, "Md", "Mendelevium", 258.0, Actinide),
    (102, "No", "Nobelium", 259.0, Actinide),
    (103, "Lr", "Lawrencium", 266.0, Actinide),
    (104, "Rf", "Rutherfordium", 267.0, TransitionMetal),
    (105, "Db", "Dubnium", 268.0, TransitionMetal),
    (106, "Sg", "Seaborgium", 269.0, TransitionMetal),
    (107, "Bh", "Bohrium", 270.0, TransitionMetal),
    (108, "Hs", "Hassium", 277.0, TransitionMetal),
    (109, "Mt", "Meitnerium", 278.0, TransitionMetal),
    (110, "Ds", "Darmstadtium", 281.0, TransitionMetal),
    (111, "Rg", "Roentgenium", 282.0, TransitionMetal),
    (112, "Cn", "Copernicium", 285.0, TransitionMetal),
    (113, "Nh", "Nihonium", 286.0, PostTransitionMetal),
    (114, "Fl", "Flerovium", 289.0, PostTransitionMetal),
    (115, "Mc", "Moscovium", 290.0, PostTransitionMetal),
    (116, "Lv", "Livermorium", 293.0, PostTransitionMetal),
    (117, "Ts", "Tennessine", 294.0, Halogen),
    (118, "Og", "Oganesson", 294.0, NobleGas),
];

pub(super) const WORD_EMOJI: [(&str, &str); 30] = [
    ("love", "❤️"),
    ("heart", "💖"),
    ("fire", "🔥"),
    ("broken", "💔"),
    ("cry", "😢"),
    ("tears", "😢"),
    ("star", "⭐"),
    ("right", "✅"),
    ("sad", "😢"),
    ("happy", "😊"),
    ("go", "🏃"),
    ("stop", "🛑"),
    ("play", "▶️"),
    ("rewind", "⏪"),
    ("smile", "😄"),
    ("time", "⏳"),
    ("peace", "✌️"),
    ("win", "🏆"),
    ("wave", "👋"),
    ("100", "💯"),
    ("music", "🎵"),
    ("dance", "💃"),
    ("party", "🎉"),
    ("cool", "😎"),
    ("hot", "🔥"),
    ("cold", "❄️"),
    ("sun", "☀️"),
    ("moon", "🌙"),
    ("night", "🌃"),
    ("day", "🌅"),
];

/// `(key, display symbol, name)` for the math/physics fallback table.
pub(super) const MATH_SYMBOLS: [(&str, &str, &str); 40] = [
    ("A", "∀", "Universal Quant"),
    ("B", "𝔅", "Magnetic Field"),
    ("C", "℃", "Celsius"),
    ("D", "∆", "Delta"),
    ("E", "ℯ", "Euler's Num"),
    ("F", "∮", "Line Integral"),
    ("G", "𝒢", "Gravity"),
    ("H", "ℏ", "hbar"),
    ("I", "𝕀", "Identity Matrix"),
    ("J", "𝒥", "Joule"),
    ("K", "𝒦", "Kelvin"),
    ("L", "𝓛", "Lagrangian"),
    ("M", "𝓜", "Mass"),
    ("N", "𝒩", "Normal Dist"),
    ("O", "Ω", "Ohm"),
    ("P", "∏", "Product"),
    ("Q", "ℚ", "Rational Nums"),
    ("R", "ℝ", "Real Nums"),
    ("S", "∑", "Summation"),
    ("T", "⊤", "Truth/Tesla"),
    ("U", "µ", "Micro"),
    ("V", "√", "Square Root"),
    ("W", "𝒲", "Watt/Work"),
    ("X", "×", "Multiply/Unknown"),
    ("Y", "γ", "Gamma Ray"),
    ("Z", "ℤ", "Integers/Atomic"),
    ("+", "+", "Plus"),
    ("-", "-", "Minus"),
    ("*", "*", "Multiply"),
    ("/", "/", "Divide"),
    ("=", "=", "Equals"),
    (">", ">", "Greater Than"),
    ("<", "<", "Less Than"),
    ("(", "(", "Left Paren"),
    (")", ")", "Right Paren"),
    ("[", "[", "Left Bracket"),
    ("]", "]", "Right Bracket"),
    ("{", "{", "Left Brace"),
    ("}", "}", "Right Brace"),
    ("e", "e", "Exponential"),
];
