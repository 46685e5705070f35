//! 組み込み車両カタログ
//!
//! 並び順はブランド判定の優先順位を兼ねる（先に一致したものを採用）。
//! 短いエイリアス（"MG", "DS", "RAM" など）は他の単語の一部にも一致しうる。

/// (ブランド表示名, エイリアス, モデル)
pub(super) const BUILTIN_VEHICLES: &[(&str, &[&str], &[&str])] = &[
    (
        "Toyota",
        &["TOYOTA", "TOY", "TOYTA", "TYOTA"],
        &["Corolla", "Yaris", "Auris", "Avensis", "RAV4", "C-HR", "Prius", "Land Cruiser", "Hilux", "Aygo"],
    ),
    (
        "Volkswagen",
        &["VW", "VOLKSWAGEN", "VOLK"],
        &[
            "Golf", "Polo", "Passat", "Tiguan", "Touran", "T-Roc", "Touareg", "Caddy",
            "Transporter", "Scirocco", "Sharan", "Jetta",
        ],
    ),
    ("BMW", &["BMW", "B M W"], &["X1", "X3", "X5", "X6", "Z4", "M3"]),
    (
        "Mercedes-Benz",
        &["MERCEDES", "MB", "BENZ", "MERCEDES BENZ"],
        &["Sprinter", "Vito", "Citan", "GLA", "GLC", "CLA", "SLK"],
    ),
    ("Audi", &["AUDI"], &["A1", "A3", "A4", "A6", "Q3", "Q5", "Q7", "TT"]),
    (
        "Renault",
        &["RENAULT", "RENAU", "RENO"],
        &["Clio", "Megane", "Scenic", "Kangoo", "Laguna", "Captur", "Twingo", "Kadjar", "Trafic", "Master"],
    ),
    (
        "Peugeot",
        &["PEUGEOT", "PEUGOT", "PYO"],
        &["2008", "3008", "5008", "206", "207", "208", "307", "308", "Partner", "Expert", "Rifter"],
    ),
    (
        "Citroën",
        &["CITROEN", "CITROËN", "CITRO"],
        &["C-Elysée", "Berlingo", "Xsara", "Picasso", "Saxo", "Jumpy", "C3", "C4", "C5"],
    ),
    (
        "Ford",
        &["FORD"],
        &["Fiesta", "Focus", "Mondeo", "Kuga", "Puma", "Transit", "Ranger", "Mustang", "C-Max", "S-Max"],
    ),
    (
        "Opel",
        &["OPEL", "OPEL GM"],
        &["Corsa", "Astra", "Insignia", "Meriva", "Zafira", "Mokka", "Vectra", "Vivaro", "Combo"],
    ),
    (
        "Seat",
        &["SEAT"],
        &["Ibiza", "León", "Arona", "Ateca", "Tarraco", "Alhambra", "Toledo", "Altea", "Córdoba", "Mii"],
    ),
    (
        "Skoda",
        &["SKODA", "ŠKODA"],
        &["Octavia", "Fabia", "Superb", "Kodiaq", "Karoq", "Rapid", "Scala", "Kamiq", "Yeti"],
    ),
    (
        "Hyundai",
        &["HYUNDAI", "HYUNDAY"],
        &["i10", "i20", "i30", "Tucson", "Kona", "Santa Fe", "Ioniq", "Elantra", "Getz", "Accent"],
    ),
    (
        "Kia",
        &["KIA"],
        &["Ceed", "Sportage", "Picanto", "Niro", "Stonic", "Sorento", "Carens", "Soul"],
    ),
    (
        "Nissan",
        &["NISSAN", "NISAN"],
        &["Qashqai", "Juke", "Micra", "X-Trail", "Navara", "Leaf", "Almera", "Primera", "Pathfinder"],
    ),
    ("Mazda", &["MAZDA"], &["CX-30", "CX-3", "CX-5", "MX-5"]),
    ("Honda", &["HONDA"], &["Civic", "Jazz", "Accord", "CR-V", "HR-V"]),
    (
        "Mitsubishi",
        &["MITSUBISHI", "MITSU"],
        &["Outlander", "ASX", "Montero", "L200", "Space Star", "Colt", "Pajero"],
    ),
    ("Subaru", &["SUBARU"], &["Impreza", "Forester", "Outback", "XV"]),
    (
        "Suzuki",
        &["SUZUKI", "SUZUKI MOTOR"],
        &["Swift", "Vitara", "Jimny", "SX4", "Ignis", "Baleno"],
    ),
    (
        "Fiat",
        &["FIAT"],
        &["500X", "500L", "500", "Panda", "Punto", "Tipo", "Doblo", "Ducato", "Bravo", "Stilo"],
    ),
    (
        "Alfa Romeo",
        &["ALFA", "ALFA ROMEO"],
        &["Giulietta", "Giulia", "MiTo", "Stelvio", "147", "156", "159"],
    ),
    (
        "Jeep",
        &["JEEP"],
        &["Renegade", "Compass", "Grand Cherokee", "Cherokee", "Wrangler"],
    ),
    (
        "Volvo",
        &["VOLVO"],
        &["XC40", "XC60", "XC90", "V40", "V60", "V70", "S40", "S60"],
    ),
    ("Mini", &["MINI", "MINI COOPER"], &["Countryman", "Clubman", "Paceman", "Cooper"]),
    ("Tesla", &["TESLA"], &[]),
    (
        "Porsche",
        &["PORSCHE"],
        &["Cayenne", "Macan", "Panamera", "911", "Boxster", "Cayman"],
    ),
    ("Lexus", &["LEXUS"], &[]),
    (
        "Land Rover",
        &["LAND ROVER", "RANGE ROVER"],
        &["Defender", "Discovery", "Freelander", "Evoque", "Velar"],
    ),
    ("Jaguar", &["JAGUAR"], &["F-Pace", "E-Pace", "XF", "XE"]),
    (
        "Dacia",
        &["DACIA"],
        &["Sandero", "Duster", "Logan", "Lodgy", "Dokker", "Jogger", "Spring"],
    ),
    (
        "Chevrolet",
        &["CHEVROLET", "CHEVY"],
        &["Aveo", "Cruze", "Captiva", "Spark", "Lacetti", "Matiz"],
    ),
    ("Chrysler", &["CHRYSLER"], &["Voyager", "PT Cruiser"]),
    ("Dodge", &["DODGE"], &["Journey", "Caliber", "Nitro"]),
    ("Ram", &["RAM", "DODGE RAM"], &[]),
    ("Cupra", &["CUPRA"], &["Formentor", "Born", "León", "Ateca"]),
    ("SsangYong", &["SSANGYONG", "SSANG YONG"], &["Tivoli", "Korando", "Rexton", "Kyron"]),
    ("MG", &["MG", "MORRIS GARAGES"], &[]),
    ("BYD", &["BYD", "BUILD YOUR DREAMS"], &["Atto 3", "Seal", "Dolphin"]),
    ("Polestar", &["POLESTAR"], &[]),
    ("Smart", &["SMART"], &["ForTwo", "ForFour"]),
    ("DS", &["DS", "DS AUTOMOBILES"], &["DS 3", "DS 4", "DS 7"]),
    ("Infiniti", &["INFINITI"], &[]),
    ("Isuzu", &["ISUZU"], &["D-Max"]),
    ("Iveco", &["IVECO"], &["Daily"]),
    ("Lancia", &["LANCIA"], &["Ypsilon", "Delta", "Musa"]),
    ("Abarth", &["ABARTH"], &["595", "695"]),
    ("Great Wall", &["GREAT WALL", "GWM"], &["Steed"]),
    ("Geely", &["GEELY"], &[]),
];
