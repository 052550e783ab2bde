//! Taxon data compiled into the crate.
//!
//! The records are kept as `'static` literals and only turned into owned
//! [Taxon] values when a catalog is built from them. Order matters: it is
//! the insertion order of the catalog, and thus the order of roots and
//! children everywhere.

use crate::model::level::TaxonomicLevel::{self, *};
use crate::model::taxon::Taxon;

/// Static counterpart of [Taxon].
struct TaxonRecord {
    id: &'static str,
    name: &'static str,
    latin_name: &'static str,
    description: &'static str,
    parent_id: Option<&'static str>,
    level: TaxonomicLevel,
    image_url: &'static str,
    characteristics: Option<&'static [&'static str]>,
    examples: Option<&'static [&'static str]>,
}

impl TaxonRecord {
    fn to_taxon(&self) -> Taxon {
        Taxon {
            id: self.id.to_string(),
            name: self.name.to_string(),
            latin_name: self.latin_name.to_string(),
            description: self.description.to_string(),
            parent_id: self.parent_id.map(str::to_string),
            level: self.level,
            image_url: self.image_url.to_string(),
            characteristics: self.characteristics.map(to_strings),
            examples: self.examples.map(to_strings),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the sample taxa in catalog order.
pub(crate) fn taxa() -> Vec<Taxon> {
    SAMPLE_TAXA.iter().map(TaxonRecord::to_taxon).collect()
}

/// Number of taxa in the sample data.
pub(crate) const NUM_SAMPLE_TAXA: usize = 18;

// Domains, then one branch of Eukarya down to two species.
const SAMPLE_TAXA: [TaxonRecord; NUM_SAMPLE_TAXA] = [
    TaxonRecord {
        id: "bacteria",
        name: "Бактерии",
        latin_name: "Bacteria",
        description: "Домен одноклеточных микроорганизмов. Бактерии имеют клеточную стенку и не имеют ядра.",
        parent_id: None,
        level: Domain,
        image_url: "https://images.unsplash.com/photo-1610394352573-ee7ec01c6e8c?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Одноклеточные", "Прокариоты", "Нет ядра", "Есть клеточная стенка"]),
        examples: Some(&["Cyanobacteria", "Proteobacteria", "Firmicutes"]),
    },
    TaxonRecord {
        id: "archaea",
        name: "Археи",
        latin_name: "Archaea",
        description: "Домен одноклеточных микроорганизмов. Археи имеют клеточную стенку и не имеют ядра, но генетически отличаются от бактерий.",
        parent_id: None,
        level: Domain,
        image_url: "https://images.unsplash.com/photo-1617041866522-52f9a7d2179d?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Одноклеточные", "Прокариоты", "Часто обитают в экстремальных условиях"]),
        examples: Some(&["Thermoproteales", "Halobacteriales", "Methanosarcinales"]),
    },
    TaxonRecord {
        id: "eukarya",
        name: "Эукариоты",
        latin_name: "Eukarya",
        description: "Домен живых организмов, клетки которых содержат ядро.",
        parent_id: None,
        level: Domain,
        image_url: "https://images.unsplash.com/photo-1570288685369-f7305163d0e3?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Имеют клеточное ядро", "Сложная внутренняя организация", "Могут быть одноклеточными или многоклеточными"]),
        examples: Some(&["Растения", "Животные", "Грибы", "Простейшие"]),
    },
    TaxonRecord {
        id: "animalia",
        name: "Животные",
        latin_name: "Animalia",
        description: "Многоклеточные организмы, которые питаются готовыми органическими веществами и способны активно передвигаться.",
        parent_id: Some("eukarya"),
        level: Kingdom,
        image_url: "https://images.unsplash.com/photo-1602491453631-e2a5ad90a131?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Многоклеточные", "Гетеротрофы", "Способны к передвижению", "Отсутствие клеточной стенки"]),
        examples: Some(&["Млекопитающие", "Птицы", "Рептилии", "Рыбы", "Насекомые"]),
    },
    TaxonRecord {
        id: "plantae",
        name: "Растения",
        latin_name: "Plantae",
        description: "Многоклеточные организмы, способные к фотосинтезу, имеющие клеточную стенку и неподвижные.",
        parent_id: Some("eukarya"),
        level: Kingdom,
        image_url: "https://images.unsplash.com/photo-1457530378978-8bac673b8062?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Многоклеточные", "Автотрофы", "Способны к фотосинтезу", "Имеют клеточную стенку"]),
        examples: Some(&["Покрытосеменные", "Голосеменные", "Папоротники", "Мхи"]),
    },
    TaxonRecord {
        id: "fungi",
        name: "Грибы",
        latin_name: "Fungi",
        description: "Организмы, питающиеся готовыми органическими веществами путем внешнего переваривания.",
        parent_id: Some("eukarya"),
        level: Kingdom,
        image_url: "https://images.unsplash.com/photo-1566244838200-9353ca34b428?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Эукариоты", "Гетеротрофы", "Имеют клеточную стенку", "Отсутствие хлорофилла"]),
        examples: Some(&["Аскомицеты", "Базидиомицеты", "Зигомицеты"]),
    },
    TaxonRecord {
        id: "chordata",
        name: "Хордовые",
        latin_name: "Chordata",
        description: "Тип животных, для которых характерно наличие хорды, полой нервной трубки и глоточных щелей.",
        parent_id: Some("animalia"),
        level: Phylum,
        image_url: "https://images.unsplash.com/photo-1566240134911-c77a6366a8c5?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Наличие хорды", "Полая нервная трубка", "Глоточные щели в эмбриональном периоде"]),
        examples: Some(&["Млекопитающие", "Птицы", "Рептилии", "Амфибии", "Рыбы"]),
    },
    TaxonRecord {
        id: "arthropoda",
        name: "Членистоногие",
        latin_name: "Arthropoda",
        description: "Тип беспозвоночных животных с сегментированным телом и членистыми конечностями.",
        parent_id: Some("animalia"),
        level: Phylum,
        image_url: "https://images.unsplash.com/photo-1600865624369-9bef972ba401?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Сегментированное тело", "Членистые конечности", "Хитиновый экзоскелет"]),
        examples: Some(&["Насекомые", "Паукообразные", "Ракообразные"]),
    },
    TaxonRecord {
        id: "mammalia",
        name: "Млекопитающие",
        latin_name: "Mammalia",
        description: "Класс позвоночных животных, вскармливающих детёнышей молоком и имеющих волосяной покров.",
        parent_id: Some("chordata"),
        level: Class,
        image_url: "https://images.unsplash.com/photo-1581009146145-b5ef050c2e1e?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Вскармливание молоком", "Волосяной покров", "Диафрагма", "Теплокровность"]),
        examples: Some(&["Приматы", "Хищные", "Грызуны", "Китообразные"]),
    },
    TaxonRecord {
        id: "aves",
        name: "Птицы",
        latin_name: "Aves",
        description: "Класс позвоночных животных, имеющих перья, клюв и откладывающих яйца.",
        parent_id: Some("chordata"),
        level: Class,
        image_url: "https://images.unsplash.com/photo-1452570053594-1b985d6ea890?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Перьевой покров", "Клюв", "Теплокровность", "Откладывание яиц"]),
        examples: Some(&["Воробьинообразные", "Соколообразные", "Гусеобразные"]),
    },
    TaxonRecord {
        id: "primates",
        name: "Приматы",
        latin_name: "Primates",
        description: "Отряд млекопитающих, включающий лемуров, долгопятов, обезьян и людей.",
        parent_id: Some("mammalia"),
        level: Order,
        image_url: "https://images.unsplash.com/photo-1544382748-9f990734b5fd?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Большой мозг", "Хватательные конечности", "Зрение вместо обоняния", "Сложное социальное поведение"]),
        examples: Some(&["Человекообразные обезьяны", "Мартышковые", "Лемуры"]),
    },
    TaxonRecord {
        id: "carnivora",
        name: "Хищные",
        latin_name: "Carnivora",
        description: "Отряд плацентарных млекопитающих, преимущественно плотоядных животных.",
        parent_id: Some("mammalia"),
        level: Order,
        image_url: "https://images.unsplash.com/photo-1589656966895-2f33e7653819?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Острые клыки", "Когти", "Мощные челюсти", "Развитые органы чувств"]),
        examples: Some(&["Кошачьи", "Собачьи", "Медвежьи"]),
    },
    TaxonRecord {
        id: "hominidae",
        name: "Гоминиды",
        latin_name: "Hominidae",
        description: "Семейство приматов, к которому относятся современные люди, человекообразные обезьяны и их предки.",
        parent_id: Some("primates"),
        level: Family,
        image_url: "https://images.unsplash.com/photo-1560812500-629a1e485fb2?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Отсутствие хвоста", "Прямая осанка", "Развитый мозг", "Сложное социальное поведение"]),
        examples: Some(&["Человек", "Шимпанзе", "Горилла", "Орангутан"]),
    },
    TaxonRecord {
        id: "felidae",
        name: "Кошачьи",
        latin_name: "Felidae",
        description: "Семейство хищных млекопитающих, включающее кошек, львов, тигров и других.",
        parent_id: Some("carnivora"),
        level: Family,
        image_url: "https://images.unsplash.com/photo-1548681528-6a5c45b66b42?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Втяжные когти", "Острые зубы", "Гибкое тело", "Превосходное зрение в темноте"]),
        examples: Some(&["Лев", "Тигр", "Рысь", "Домашняя кошка"]),
    },
    TaxonRecord {
        id: "homo",
        name: "Человек",
        latin_name: "Homo",
        description: "Род приматов семейства гоминид, включающий современного человека и его непосредственных предков.",
        parent_id: Some("hominidae"),
        level: Genus,
        image_url: "https://images.unsplash.com/photo-1607748851687-ba9a10438621?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Прямохождение", "Развитие речи", "Высокий интеллект", "Использование орудий труда"]),
        examples: Some(&["Человек разумный", "Неандерталец", "Человек прямоходящий"]),
    },
    TaxonRecord {
        id: "panthera",
        name: "Пантера",
        latin_name: "Panthera",
        description: "Род крупных диких кошек, включающий тигров, львов, ягуаров и леопардов.",
        parent_id: Some("felidae"),
        level: Genus,
        image_url: "https://images.unsplash.com/photo-1546182990-dffeafbe841d?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Крупный размер", "Громкий рык", "Мощные челюсти", "Территориальное поведение"]),
        examples: Some(&["Лев", "Тигр", "Ягуар", "Леопард"]),
    },
    TaxonRecord {
        id: "homo_sapiens",
        name: "Человек разумный",
        latin_name: "Homo sapiens",
        description: "Единственный современный вид рода Homo. Разумное социальное существо, обладающее развитым мышлением и членораздельной речью.",
        parent_id: Some("homo"),
        level: Species,
        image_url: "https://images.unsplash.com/photo-1552058544-f2b08422138a?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Развитый головной мозг", "Абстрактное мышление", "Сложная речь", "Письменность", "Технологии"]),
        examples: None,
    },
    TaxonRecord {
        id: "panthera_leo",
        name: "Лев",
        latin_name: "Panthera leo",
        description: "Вид хищных млекопитающих, один из представителей рода пантер, наряду с тигром, ягуаром и леопардом.",
        parent_id: Some("panthera"),
        level: Species,
        image_url: "https://images.unsplash.com/photo-1614027164847-1b28cfe1df60?q=80&w=1974&auto=format&fit=crop",
        characteristics: Some(&["Социальное поведение", "Половой диморфизм (у самцов грива)", "Групповая охота", "Территориальность"]),
        examples: None,
    },
];
