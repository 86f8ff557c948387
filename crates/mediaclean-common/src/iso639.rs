//! Embedded ISO 639 reference table.
//!
//! Each row carries the ISO 639-3 identifier, the ISO 639-2 bibliographic and
//! terminological aliases, the ISO 639-1 two-letter alias, and the reference
//! name. Alternative names are separated by `;`.
//!
//! Rows cover every ISO 639-2 code except the `qaa-qtz` local-use range,
//! plus the ISO 639-3 Chinese varieties mkvmerge and mediainfo report.

use crate::language::Language;

const fn lang(
    id: &'static str,
    part2b: &'static str,
    part2t: &'static str,
    part1: &'static str,
    name: &'static str,
) -> Language {
    Language {
        id,
        part2b: if part2b.is_empty() { None } else { Some(part2b) },
        part2t: if part2t.is_empty() { None } else { Some(part2t) },
        part1: if part1.is_empty() { None } else { Some(part1) },
        name,
    }
}

pub(crate) const LANGUAGES: &[Language] = &[
    lang("abk", "abk", "abk", "ab", "Abkhazian"),
    lang("ace", "ace", "ace", "", "Achinese"),
    lang("ach", "ach", "ach", "", "Acoli"),
    lang("ada", "ada", "ada", "", "Adangme"),
    lang("ady", "ady", "ady", "", "Adyghe; Adygei"),
    lang("aar", "aar", "aar", "aa", "Afar"),
    lang("afh", "afh", "afh", "", "Afrihili"),
    lang("afr", "afr", "afr", "af", "Afrikaans"),
    lang("afa", "afa", "afa", "", "Afro-Asiatic languages"),
    lang("ain", "ain", "ain", "", "Ainu"),
    lang("aka", "aka", "aka", "ak", "Akan"),
    lang("akk", "akk", "akk", "", "Akkadian"),
    lang("sqi", "alb", "sqi", "sq", "Albanian"),
    lang("ale", "ale", "ale", "", "Aleut"),
    lang("alg", "alg", "alg", "", "Algonquian languages"),
    lang("tut", "tut", "tut", "", "Altaic languages"),
    lang("amh", "amh", "amh", "am", "Amharic"),
    lang("anp", "anp", "anp", "", "Angika"),
    lang("apa", "apa", "apa", "", "Apache languages"),
    lang("ara", "ara", "ara", "ar", "Arabic"),
    lang("arg", "arg", "arg", "an", "Aragonese"),
    lang("arp", "arp", "arp", "", "Arapaho"),
    lang("arw", "arw", "arw", "", "Arawak"),
    lang("hye", "arm", "hye", "hy", "Armenian"),
    lang("rup", "rup", "rup", "", "Aromanian; Arumanian; Macedo-Romanian"),
    lang("art", "art", "art", "", "Artificial languages"),
    lang("asm", "asm", "asm", "as", "Assamese"),
    lang("ast", "ast", "ast", "", "Asturian; Bable; Leonese; Asturleonese"),
    lang("ath", "ath", "ath", "", "Athapascan languages"),
    lang("aus", "aus", "aus", "", "Australian languages"),
    lang("map", "map", "map", "", "Austronesian languages"),
    lang("ava", "ava", "ava", "av", "Avaric"),
    lang("ave", "ave", "ave", "ae", "Avestan"),
    lang("awa", "awa", "awa", "", "Awadhi"),
    lang("aym", "aym", "aym", "ay", "Aymara"),
    lang("aze", "aze", "aze", "az", "Azerbaijani"),
    lang("ban", "ban", "ban", "", "Balinese"),
    lang("bat", "bat", "bat", "", "Baltic languages"),
    lang("bal", "bal", "bal", "", "Baluchi"),
    lang("bam", "bam", "bam", "bm", "Bambara"),
    lang("bai", "bai", "bai", "", "Bamileke languages"),
    lang("bad", "bad", "bad", "", "Banda languages"),
    lang("bnt", "bnt", "bnt", "", "Bantu (Other)"),
    lang("bas", "bas", "bas", "", "Basa"),
    lang("bak", "bak", "bak", "ba", "Bashkir"),
    lang("eus", "baq", "eus", "eu", "Basque"),
    lang("btk", "btk", "btk", "", "Batak languages"),
    lang("bej", "bej", "bej", "", "Beja; Bedawiyet"),
    lang("bel", "bel", "bel", "be", "Belarusian"),
    lang("bem", "bem", "bem", "", "Bemba"),
    lang("ben", "ben", "ben", "bn", "Bengali; Bangla"),
    lang("ber", "ber", "ber", "", "Berber languages"),
    lang("bho", "bho", "bho", "", "Bhojpuri"),
    lang("bih", "bih", "bih", "bh", "Bihari languages"),
    lang("bik", "bik", "bik", "", "Bikol"),
    lang("bin", "bin", "bin", "", "Bini; Edo"),
    lang("bis", "bis", "bis", "bi", "Bislama"),
    lang("byn", "byn", "byn", "", "Blin; Bilin"),
    lang("zbl", "zbl", "zbl", "", "Blissymbols; Blissymbolics; Bliss"),
    lang("bos", "bos", "bos", "bs", "Bosnian"),
    lang("bra", "bra", "bra", "", "Braj"),
    lang("bre", "bre", "bre", "br", "Breton"),
    lang("bug", "bug", "bug", "", "Buginese"),
    lang("bul", "bul", "bul", "bg", "Bulgarian"),
    lang("bua", "bua", "bua", "", "Buriat"),
    lang("mya", "bur", "mya", "my", "Burmese"),
    lang("cad", "cad", "cad", "", "Caddo"),
    lang("yue", "", "", "", "Cantonese; Yue Chinese"),
    lang("cat", "cat", "cat", "ca", "Catalan; Valencian"),
    lang("cau", "cau", "cau", "", "Caucasian languages"),
    lang("ceb", "ceb", "ceb", "", "Cebuano"),
    lang("cel", "cel", "cel", "", "Celtic languages"),
    lang("cai", "cai", "cai", "", "Central American Indian languages"),
    lang("chg", "chg", "chg", "", "Chagatai"),
    lang("cmc", "cmc", "cmc", "", "Chamic languages"),
    lang("cha", "cha", "cha", "ch", "Chamorro"),
    lang("che", "che", "che", "ce", "Chechen"),
    lang("chr", "chr", "chr", "", "Cherokee"),
    lang("chy", "chy", "chy", "", "Cheyenne"),
    lang("chb", "chb", "chb", "", "Chibcha"),
    lang("nya", "nya", "nya", "ny", "Chichewa; Chewa; Nyanja"),
    lang("zho", "chi", "zho", "zh", "Chinese"),
    lang("chn", "chn", "chn", "", "Chinook jargon"),
    lang("chp", "chp", "chp", "", "Chipewyan; Dene Suline"),
    lang("cho", "cho", "cho", "", "Choctaw"),
    lang("chu", "chu", "chu", "cu", "Church Slavic; Old Slavonic; Church Slavonic; Old Bulgarian; Old Church Slavonic"),
    lang("chk", "chk", "chk", "", "Chuukese"),
    lang("chv", "chv", "chv", "cv", "Chuvash"),
    lang("nwc", "nwc", "nwc", "", "Classical Newari; Old Newari; Classical Nepal Bhasa"),
    lang("syc", "syc", "syc", "", "Classical Syriac"),
    lang("cop", "cop", "cop", "", "Coptic"),
    lang("cor", "cor", "cor", "kw", "Cornish"),
    lang("cos", "cos", "cos", "co", "Corsican"),
    lang("cre", "cre", "cre", "cr", "Cree"),
    lang("mus", "mus", "mus", "", "Creek"),
    lang("crp", "crp", "crp", "", "Creoles and pidgins"),
    lang("cpe", "cpe", "cpe", "", "Creoles and pidgins, English based"),
    lang("cpf", "cpf", "cpf", "", "Creoles and pidgins, French-based"),
    lang("cpp", "cpp", "cpp", "", "Creoles and pidgins, Portuguese-based"),
    lang("crh", "crh", "crh", "", "Crimean Tatar; Crimean Turkish"),
    lang("hrv", "hrv", "hrv", "hr", "Croatian"),
    lang("cus", "cus", "cus", "", "Cushitic languages"),
    lang("ces", "cze", "ces", "cs", "Czech"),
    lang("dak", "dak", "dak", "", "Dakota"),
    lang("dan", "dan", "dan", "da", "Danish"),
    lang("dar", "dar", "dar", "", "Dargwa"),
    lang("del", "del", "del", "", "Delaware"),
    lang("din", "din", "din", "", "Dinka"),
    lang("div", "div", "div", "dv", "Divehi; Dhivehi; Maldivian"),
    lang("doi", "doi", "doi", "", "Dogri"),
    lang("dgr", "dgr", "dgr", "", "Dogrib"),
    lang("dra", "dra", "dra", "", "Dravidian languages"),
    lang("dua", "dua", "dua", "", "Duala"),
    lang("nld", "dut", "nld", "nl", "Dutch; Flemish"),
    lang("dum", "dum", "dum", "", "Dutch, Middle (ca. 1050-1350)"),
    lang("dyu", "dyu", "dyu", "", "Dyula"),
    lang("dzo", "dzo", "dzo", "dz", "Dzongkha"),
    lang("frs", "frs", "frs", "", "Eastern Frisian"),
    lang("efi", "efi", "efi", "", "Efik"),
    lang("egy", "egy", "egy", "", "Egyptian (Ancient)"),
    lang("eka", "eka", "eka", "", "Ekajuk"),
    lang("elx", "elx", "elx", "", "Elamite"),
    lang("eng", "eng", "eng", "en", "English"),
    lang("enm", "enm", "enm", "", "English, Middle (1100-1500)"),
    lang("ang", "ang", "ang", "", "English, Old (ca. 450-1100)"),
    lang("myv", "myv", "myv", "", "Erzya"),
    lang("epo", "epo", "epo", "eo", "Esperanto"),
    lang("est", "est", "est", "et", "Estonian"),
    lang("ewe", "ewe", "ewe", "ee", "Ewe"),
    lang("ewo", "ewo", "ewo", "", "Ewondo"),
    lang("fan", "fan", "fan", "", "Fang"),
    lang("fat", "fat", "fat", "", "Fanti"),
    lang("fao", "fao", "fao", "fo", "Faroese"),
    lang("fij", "fij", "fij", "fj", "Fijian"),
    lang("fil", "fil", "fil", "", "Filipino; Pilipino"),
    lang("fin", "fin", "fin", "fi", "Finnish"),
    lang("fiu", "fiu", "fiu", "", "Finno-Ugrian languages"),
    lang("fon", "fon", "fon", "", "Fon"),
    lang("fra", "fre", "fra", "fr", "French"),
    lang("frm", "frm", "frm", "", "French, Middle (ca. 1400-1600)"),
    lang("fro", "fro", "fro", "", "French, Old (842-ca. 1400)"),
    lang("fur", "fur", "fur", "", "Friulian"),
    lang("ful", "ful", "ful", "ff", "Fulah"),
    lang("gaa", "gaa", "gaa", "", "Ga"),
    lang("car", "car", "car", "", "Galibi Carib"),
    lang("glg", "glg", "glg", "gl", "Galician"),
    lang("lug", "lug", "lug", "lg", "Ganda"),
    lang("gay", "gay", "gay", "", "Gayo"),
    lang("gba", "gba", "gba", "", "Gbaya"),
    lang("gez", "gez", "gez", "", "Geez"),
    lang("kat", "geo", "kat", "ka", "Georgian"),
    lang("deu", "ger", "deu", "de", "German"),
    lang("gmh", "gmh", "gmh", "", "German, Middle High (ca. 1050-1500)"),
    lang("goh", "goh", "goh", "", "German, Old High (ca. 750-1050)"),
    lang("gem", "gem", "gem", "", "Germanic languages"),
    lang("gil", "gil", "gil", "", "Gilbertese"),
    lang("gon", "gon", "gon", "", "Gondi"),
    lang("gor", "gor", "gor", "", "Gorontalo"),
    lang("got", "got", "got", "", "Gothic"),
    lang("grb", "grb", "grb", "", "Grebo"),
    lang("ell", "gre", "ell", "el", "Greek; Modern Greek; Greek, Modern (1453-)"),
    lang("grc", "grc", "grc", "", "Greek, Ancient (to 1453)"),
    lang("grn", "grn", "grn", "gn", "Guarani"),
    lang("guj", "guj", "guj", "gu", "Gujarati"),
    lang("gwi", "gwi", "gwi", "", "Gwich'in"),
    lang("hai", "hai", "hai", "", "Haida"),
    lang("hat", "hat", "hat", "ht", "Haitian; Haitian Creole"),
    lang("hau", "hau", "hau", "ha", "Hausa"),
    lang("haw", "haw", "haw", "", "Hawaiian"),
    lang("heb", "heb", "heb", "he", "Hebrew"),
    lang("her", "her", "her", "hz", "Herero"),
    lang("hil", "hil", "hil", "", "Hiligaynon"),
    lang("him", "him", "him", "", "Himachali languages; Western Pahari languages"),
    lang("hin", "hin", "hin", "hi", "Hindi"),
    lang("hmo", "hmo", "hmo", "ho", "Hiri Motu"),
    lang("hit", "hit", "hit", "", "Hittite"),
    lang("hmn", "hmn", "hmn", "", "Hmong; Mong"),
    lang("hun", "hun", "hun", "hu", "Hungarian"),
    lang("hup", "hup", "hup", "", "Hupa"),
    lang("iba", "iba", "iba", "", "Iban"),
    lang("isl", "ice", "isl", "is", "Icelandic"),
    lang("ido", "ido", "ido", "io", "Ido"),
    lang("ibo", "ibo", "ibo", "ig", "Igbo"),
    lang("ijo", "ijo", "ijo", "", "Ijo languages"),
    lang("ilo", "ilo", "ilo", "", "Iloko"),
    lang("smn", "smn", "smn", "", "Inari Sami"),
    lang("inc", "inc", "inc", "", "Indic languages"),
    lang("ine", "ine", "ine", "", "Indo-European languages"),
    lang("ind", "ind", "ind", "id", "Indonesian"),
    lang("inh", "inh", "inh", "", "Ingush"),
    lang("ina", "ina", "ina", "ia", "Interlingua (International Auxiliary Language Association)"),
    lang("ile", "ile", "ile", "ie", "Interlingue; Occidental"),
    lang("iku", "iku", "iku", "iu", "Inuktitut"),
    lang("ipk", "ipk", "ipk", "ik", "Inupiaq"),
    lang("ira", "ira", "ira", "", "Iranian languages"),
    lang("gle", "gle", "gle", "ga", "Irish"),
    lang("mga", "mga", "mga", "", "Irish, Middle (900-1200)"),
    lang("sga", "sga", "sga", "", "Irish, Old (to 900)"),
    lang("iro", "iro", "iro", "", "Iroquoian languages"),
    lang("ita", "ita", "ita", "it", "Italian"),
    lang("jpn", "jpn", "jpn", "ja", "Japanese"),
    lang("jav", "jav", "jav", "jv", "Javanese"),
    lang("jrb", "jrb", "jrb", "", "Judeo-Arabic"),
    lang("jpr", "jpr", "jpr", "", "Judeo-Persian"),
    lang("kbd", "kbd", "kbd", "", "Kabardian"),
    lang("kab", "kab", "kab", "", "Kabyle"),
    lang("kac", "kac", "kac", "", "Kachin; Jingpho"),
    lang("kal", "kal", "kal", "kl", "Kalaallisut; Greenlandic"),
    lang("xal", "xal", "xal", "", "Kalmyk; Oirat"),
    lang("kam", "kam", "kam", "", "Kamba"),
    lang("kan", "kan", "kan", "kn", "Kannada"),
    lang("kau", "kau", "kau", "kr", "Kanuri"),
    lang("kaa", "kaa", "kaa", "", "Kara-Kalpak"),
    lang("krc", "krc", "krc", "", "Karachay-Balkar"),
    lang("krl", "krl", "krl", "", "Karelian"),
    lang("kar", "kar", "kar", "", "Karen languages"),
    lang("kas", "kas", "kas", "ks", "Kashmiri"),
    lang("csb", "csb", "csb", "", "Kashubian"),
    lang("kaw", "kaw", "kaw", "", "Kawi"),
    lang("kaz", "kaz", "kaz", "kk", "Kazakh"),
    lang("kha", "kha", "kha", "", "Khasi"),
    lang("khm", "khm", "khm", "km", "Khmer; Central Khmer"),
    lang("khi", "khi", "khi", "", "Khoisan languages"),
    lang("kho", "kho", "kho", "", "Khotanese; Sakan"),
    lang("kik", "kik", "kik", "ki", "Kikuyu; Gikuyu"),
    lang("kmb", "kmb", "kmb", "", "Kimbundu"),
    lang("kin", "kin", "kin", "rw", "Kinyarwanda"),
    lang("kir", "kir", "kir", "ky", "Kirghiz; Kyrgyz"),
    lang("tlh", "tlh", "tlh", "", "Klingon; tlhIngan-Hol"),
    lang("kom", "kom", "kom", "kv", "Komi"),
    lang("kon", "kon", "kon", "kg", "Kongo"),
    lang("kok", "kok", "kok", "", "Konkani"),
    lang("kor", "kor", "kor", "ko", "Korean"),
    lang("kos", "kos", "kos", "", "Kosraean"),
    lang("kpe", "kpe", "kpe", "", "Kpelle"),
    lang("kro", "kro", "kro", "", "Kru languages"),
    lang("kua", "kua", "kua", "kj", "Kuanyama; Kwanyama"),
    lang("kum", "kum", "kum", "", "Kumyk"),
    lang("kur", "kur", "kur", "ku", "Kurdish"),
    lang("kru", "kru", "kru", "", "Kurukh"),
    lang("kut", "kut", "kut", "", "Kutenai"),
    lang("lad", "lad", "lad", "", "Ladino"),
    lang("lah", "lah", "lah", "", "Lahnda"),
    lang("lam", "lam", "lam", "", "Lamba"),
    lang("day", "day", "day", "", "Land Dayak languages"),
    lang("lao", "lao", "lao", "lo", "Lao"),
    lang("lat", "lat", "lat", "la", "Latin"),
    lang("lav", "lav", "lav", "lv", "Latvian"),
    lang("lez", "lez", "lez", "", "Lezghian"),
    lang("lim", "lim", "lim", "li", "Limburgan; Limburger; Limburgish"),
    lang("lin", "lin", "lin", "ln", "Lingala"),
    lang("lit", "lit", "lit", "lt", "Lithuanian"),
    lang("jbo", "jbo", "jbo", "", "Lojban"),
    lang("nds", "nds", "nds", "", "Low German; Low Saxon; German, Low; Saxon, Low"),
    lang("dsb", "dsb", "dsb", "", "Lower Sorbian"),
    lang("loz", "loz", "loz", "", "Lozi"),
    lang("lub", "lub", "lub", "lu", "Luba-Katanga"),
    lang("lua", "lua", "lua", "", "Luba-Lulua"),
    lang("lui", "lui", "lui", "", "Luiseno"),
    lang("smj", "smj", "smj", "", "Lule Sami"),
    lang("lun", "lun", "lun", "", "Lunda"),
    lang("luo", "luo", "luo", "", "Luo (Kenya and Tanzania)"),
    lang("lus", "lus", "lus", "", "Lushai"),
    lang("ltz", "ltz", "ltz", "lb", "Luxembourgish; Letzeburgesch"),
    lang("mkd", "mac", "mkd", "mk", "Macedonian"),
    lang("mad", "mad", "mad", "", "Madurese"),
    lang("mag", "mag", "mag", "", "Magahi"),
    lang("mai", "mai", "mai", "", "Maithili"),
    lang("mak", "mak", "mak", "", "Makasar"),
    lang("mlg", "mlg", "mlg", "mg", "Malagasy"),
    lang("msa", "may", "msa", "ms", "Malay"),
    lang("mal", "mal", "mal", "ml", "Malayalam"),
    lang("mlt", "mlt", "mlt", "mt", "Maltese"),
    lang("mnc", "mnc", "mnc", "", "Manchu"),
    lang("mdr", "mdr", "mdr", "", "Mandar"),
    lang("cmn", "", "", "", "Mandarin Chinese; Mandarin"),
    lang("man", "man", "man", "", "Mandingo"),
    lang("mni", "mni", "mni", "", "Manipuri"),
    lang("mno", "mno", "mno", "", "Manobo languages"),
    lang("glv", "glv", "glv", "gv", "Manx"),
    lang("mri", "mao", "mri", "mi", "Maori"),
    lang("arn", "arn", "arn", "", "Mapudungun; Mapuche"),
    lang("mar", "mar", "mar", "mr", "Marathi"),
    lang("chm", "chm", "chm", "", "Mari"),
    lang("mah", "mah", "mah", "mh", "Marshallese"),
    lang("mwr", "mwr", "mwr", "", "Marwari"),
    lang("mas", "mas", "mas", "", "Masai"),
    lang("myn", "myn", "myn", "", "Mayan languages"),
    lang("men", "men", "men", "", "Mende"),
    lang("mic", "mic", "mic", "", "Mi'kmaq; Micmac"),
    lang("min", "min", "min", "", "Minangkabau"),
    lang("mwl", "mwl", "mwl", "", "Mirandese"),
    lang("moh", "moh", "moh", "", "Mohawk"),
    lang("mdf", "mdf", "mdf", "", "Moksha"),
    lang("mkh", "mkh", "mkh", "", "Mon-Khmer languages"),
    lang("lol", "lol", "lol", "", "Mongo"),
    lang("mon", "mon", "mon", "mn", "Mongolian"),
    lang("cnr", "cnr", "cnr", "", "Montenegrin"),
    lang("mos", "mos", "mos", "", "Mossi"),
    lang("mun", "mun", "mun", "", "Munda languages"),
    lang("nqo", "nqo", "nqo", "", "N'Ko"),
    lang("nah", "nah", "nah", "", "Nahuatl languages"),
    lang("nau", "nau", "nau", "na", "Nauru"),
    lang("nav", "nav", "nav", "nv", "Navajo; Navaho"),
    lang("nde", "nde", "nde", "nd", "Ndebele, North; North Ndebele"),
    lang("nbl", "nbl", "nbl", "nr", "Ndebele, South; South Ndebele"),
    lang("ndo", "ndo", "ndo", "ng", "Ndonga"),
    lang("nap", "nap", "nap", "", "Neapolitan"),
    lang("new", "new", "new", "", "Nepal Bhasa; Newari"),
    lang("nep", "nep", "nep", "ne", "Nepali"),
    lang("nia", "nia", "nia", "", "Nias"),
    lang("nic", "nic", "nic", "", "Niger-Kordofanian languages"),
    lang("ssa", "ssa", "ssa", "", "Nilo-Saharan languages"),
    lang("niu", "niu", "niu", "", "Niuean"),
    lang("nog", "nog", "nog", "", "Nogai"),
    lang("non", "non", "non", "", "Norse, Old"),
    lang("nai", "nai", "nai", "", "North American Indian languages"),
    lang("frr", "frr", "frr", "", "Northern Frisian"),
    lang("sme", "sme", "sme", "se", "Northern Sami"),
    lang("nor", "nor", "nor", "no", "Norwegian"),
    lang("nob", "nob", "nob", "nb", "Norwegian Bokmål; Bokmål; Bokmål, Norwegian"),
    lang("nno", "nno", "nno", "nn", "Norwegian Nynorsk; Nynorsk; Nynorsk, Norwegian"),
    lang("nub", "nub", "nub", "", "Nubian languages"),
    lang("nym", "nym", "nym", "", "Nyamwezi"),
    lang("nyn", "nyn", "nyn", "", "Nyankole"),
    lang("nyo", "nyo", "nyo", "", "Nyoro"),
    lang("nzi", "nzi", "nzi", "", "Nzima"),
    lang("oci", "oci", "oci", "oc", "Occitan (post 1500); Provençal"),
    lang("arc", "arc", "arc", "", "Official Aramaic (700-300 BCE); Imperial Aramaic (700-300 BCE)"),
    lang("oji", "oji", "oji", "oj", "Ojibwa"),
    lang("ori", "ori", "ori", "or", "Oriya"),
    lang("orm", "orm", "orm", "om", "Oromo"),
    lang("osa", "osa", "osa", "", "Osage"),
    lang("oss", "oss", "oss", "os", "Ossetian; Ossetic"),
    lang("oto", "oto", "oto", "", "Otomian languages"),
    lang("pal", "pal", "pal", "", "Pahlavi"),
    lang("pau", "pau", "pau", "", "Palauan"),
    lang("pli", "pli", "pli", "pi", "Pali"),
    lang("pam", "pam", "pam", "", "Pampanga; Kapampangan"),
    lang("pag", "pag", "pag", "", "Pangasinan"),
    lang("pan", "pan", "pan", "pa", "Panjabi; Punjabi"),
    lang("pap", "pap", "pap", "", "Papiamento"),
    lang("paa", "paa", "paa", "", "Papuan languages"),
    lang("nso", "nso", "nso", "", "Pedi; Sepedi; Northern Sotho"),
    lang("fas", "per", "fas", "fa", "Persian; Farsi"),
    lang("peo", "peo", "peo", "", "Persian, Old (ca. 600-400 B.C.)"),
    lang("phi", "phi", "phi", "", "Philippine languages"),
    lang("phn", "phn", "phn", "", "Phoenician"),
    lang("pon", "pon", "pon", "", "Pohnpeian"),
    lang("pol", "pol", "pol", "pl", "Polish"),
    lang("por", "por", "por", "pt", "Portuguese"),
    lang("pra", "pra", "pra", "", "Prakrit languages"),
    lang("pro", "pro", "pro", "", "Provençal, Old (to 1500)"),
    lang("pus", "pus", "pus", "ps", "Pushto; Pashto"),
    lang("que", "que", "que", "qu", "Quechua"),
    lang("raj", "raj", "raj", "", "Rajasthani"),
    lang("rap", "rap", "rap", "", "Rapanui"),
    lang("rar", "rar", "rar", "", "Rarotongan; Cook Islands Maori"),
    lang("roa", "roa", "roa", "", "Romance languages"),
    lang("ron", "rum", "ron", "ro", "Romanian; Moldavian; Moldovan"),
    lang("roh", "roh", "roh", "rm", "Romansh"),
    lang("rom", "rom", "rom", "", "Romany"),
    lang("run", "run", "run", "rn", "Rundi"),
    lang("rus", "rus", "rus", "ru", "Russian"),
    lang("sal", "sal", "sal", "", "Salishan languages"),
    lang("sam", "sam", "sam", "", "Samaritan Aramaic"),
    lang("smi", "smi", "smi", "", "Sami languages"),
    lang("smo", "smo", "smo", "sm", "Samoan"),
    lang("sad", "sad", "sad", "", "Sandawe"),
    lang("sag", "sag", "sag", "sg", "Sango"),
    lang("san", "san", "san", "sa", "Sanskrit"),
    lang("sat", "sat", "sat", "", "Santali"),
    lang("srd", "srd", "srd", "sc", "Sardinian"),
    lang("sas", "sas", "sas", "", "Sasak"),
    lang("sco", "sco", "sco", "", "Scots"),
    lang("gla", "gla", "gla", "gd", "Scottish Gaelic; Gaelic"),
    lang("sel", "sel", "sel", "", "Selkup"),
    lang("sem", "sem", "sem", "", "Semitic languages"),
    lang("srp", "srp", "srp", "sr", "Serbian"),
    lang("srr", "srr", "srr", "", "Serer"),
    lang("shn", "shn", "shn", "", "Shan"),
    lang("sna", "sna", "sna", "sn", "Shona"),
    lang("iii", "iii", "iii", "ii", "Sichuan Yi; Nuosu"),
    lang("scn", "scn", "scn", "", "Sicilian"),
    lang("sid", "sid", "sid", "", "Sidamo"),
    lang("sgn", "sgn", "sgn", "", "Sign Languages"),
    lang("bla", "bla", "bla", "", "Siksika"),
    lang("snd", "snd", "snd", "sd", "Sindhi"),
    lang("sin", "sin", "sin", "si", "Sinhala; Sinhalese"),
    lang("sit", "sit", "sit", "", "Sino-Tibetan languages"),
    lang("sio", "sio", "sio", "", "Siouan languages"),
    lang("sms", "sms", "sms", "", "Skolt Sami"),
    lang("den", "den", "den", "", "Slave (Athapascan)"),
    lang("sla", "sla", "sla", "", "Slavic languages"),
    lang("slk", "slo", "slk", "sk", "Slovak"),
    lang("slv", "slv", "slv", "sl", "Slovenian"),
    lang("sog", "sog", "sog", "", "Sogdian"),
    lang("som", "som", "som", "so", "Somali"),
    lang("son", "son", "son", "", "Songhai languages"),
    lang("snk", "snk", "snk", "", "Soninke"),
    lang("wen", "wen", "wen", "", "Sorbian languages"),
    lang("sot", "sot", "sot", "st", "Sotho, Southern"),
    lang("sai", "sai", "sai", "", "South American Indian (Other)"),
    lang("alt", "alt", "alt", "", "Southern Altai"),
    lang("sma", "sma", "sma", "", "Southern Sami"),
    lang("spa", "spa", "spa", "es", "Spanish; Castilian"),
    lang("srn", "srn", "srn", "", "Sranan Tongo"),
    lang("zgh", "zgh", "zgh", "", "Standard Moroccan Tamazight"),
    lang("suk", "suk", "suk", "", "Sukuma"),
    lang("sux", "sux", "sux", "", "Sumerian"),
    lang("sun", "sun", "sun", "su", "Sundanese"),
    lang("sus", "sus", "sus", "", "Susu"),
    lang("swa", "swa", "swa", "sw", "Swahili"),
    lang("ssw", "ssw", "ssw", "ss", "Swati"),
    lang("swe", "swe", "swe", "sv", "Swedish"),
    lang("gsw", "gsw", "gsw", "", "Swiss German; Alemannic; Alsatian"),
    lang("syr", "syr", "syr", "", "Syriac"),
    lang("tgl", "tgl", "tgl", "tl", "Tagalog"),
    lang("tah", "tah", "tah", "ty", "Tahitian"),
    lang("tai", "tai", "tai", "", "Tai languages"),
    lang("tgk", "tgk", "tgk", "tg", "Tajik"),
    lang("tmh", "tmh", "tmh", "", "Tamashek"),
    lang("tam", "tam", "tam", "ta", "Tamil"),
    lang("tat", "tat", "tat", "tt", "Tatar"),
    lang("tel", "tel", "tel", "te", "Telugu"),
    lang("ter", "ter", "ter", "", "Tereno"),
    lang("tet", "tet", "tet", "", "Tetum"),
    lang("tha", "tha", "tha", "th", "Thai"),
    lang("bod", "tib", "bod", "bo", "Tibetan"),
    lang("tig", "tig", "tig", "", "Tigre"),
    lang("tir", "tir", "tir", "ti", "Tigrinya"),
    lang("tem", "tem", "tem", "", "Timne"),
    lang("tiv", "tiv", "tiv", "", "Tiv"),
    lang("tli", "tli", "tli", "", "Tlingit"),
    lang("tpi", "tpi", "tpi", "", "Tok Pisin"),
    lang("tkl", "tkl", "tkl", "", "Tokelau"),
    lang("tog", "tog", "tog", "", "Tonga (Nyasa)"),
    lang("ton", "ton", "ton", "to", "Tonga (Tonga Islands)"),
    lang("tsi", "tsi", "tsi", "", "Tsimshian"),
    lang("tso", "tso", "tso", "ts", "Tsonga"),
    lang("tsn", "tsn", "tsn", "tn", "Tswana"),
    lang("tum", "tum", "tum", "", "Tumbuka"),
    lang("tup", "tup", "tup", "", "Tupi languages"),
    lang("tur", "tur", "tur", "tr", "Turkish"),
    lang("ota", "ota", "ota", "", "Turkish, Ottoman (1500-1928)"),
    lang("tuk", "tuk", "tuk", "tk", "Turkmen"),
    lang("tvl", "tvl", "tvl", "", "Tuvalu"),
    lang("tyv", "tyv", "tyv", "", "Tuvinian"),
    lang("twi", "twi", "twi", "tw", "Twi"),
    lang("udm", "udm", "udm", "", "Udmurt"),
    lang("uga", "uga", "uga", "", "Ugaritic"),
    lang("uig", "uig", "uig", "ug", "Uighur; Uyghur"),
    lang("ukr", "ukr", "ukr", "uk", "Ukrainian"),
    lang("umb", "umb", "umb", "", "Umbundu"),
    lang("hsb", "hsb", "hsb", "", "Upper Sorbian"),
    lang("urd", "urd", "urd", "ur", "Urdu"),
    lang("uzb", "uzb", "uzb", "uz", "Uzbek"),
    lang("vai", "vai", "vai", "", "Vai"),
    lang("ven", "ven", "ven", "ve", "Venda"),
    lang("vie", "vie", "vie", "vi", "Vietnamese"),
    lang("vol", "vol", "vol", "vo", "Volapük"),
    lang("vot", "vot", "vot", "", "Votic"),
    lang("wak", "wak", "wak", "", "Wakashan languages"),
    lang("wal", "wal", "wal", "", "Walamo"),
    lang("wln", "wln", "wln", "wa", "Walloon"),
    lang("war", "war", "war", "", "Waray"),
    lang("was", "was", "was", "", "Washo"),
    lang("cym", "wel", "cym", "cy", "Welsh"),
    lang("fry", "fry", "fry", "fy", "Western Frisian"),
    lang("wol", "wol", "wol", "wo", "Wolof"),
    lang("xho", "xho", "xho", "xh", "Xhosa"),
    lang("sah", "sah", "sah", "", "Yakut"),
    lang("yao", "yao", "yao", "", "Yao"),
    lang("yap", "yap", "yap", "", "Yapese"),
    lang("yid", "yid", "yid", "yi", "Yiddish"),
    lang("yor", "yor", "yor", "yo", "Yoruba"),
    lang("ypk", "ypk", "ypk", "", "Yupik languages"),
    lang("znd", "znd", "znd", "", "Zande languages"),
    lang("zap", "zap", "zap", "", "Zapotec"),
    lang("zza", "zza", "zza", "", "Zaza; Dimili; Dimli; Kirdki; Kirmanjki; Zazaki"),
    lang("zen", "zen", "zen", "", "Zenaga"),
    lang("zha", "zha", "zha", "za", "Zhuang; Chuang"),
    lang("zul", "zul", "zul", "zu", "Zulu"),
    lang("zun", "zun", "zun", "", "Zuni"),
    lang("mul", "mul", "mul", "", "Multiple languages"),
    lang("zxx", "zxx", "zxx", "", "No linguistic content; Not applicable"),
    lang("mis", "mis", "mis", "", "Uncoded languages"),
    lang("und", "und", "und", "", "Undetermined"),
];
