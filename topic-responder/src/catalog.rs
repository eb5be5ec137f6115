//! Built-in grade-3 course.
//!
//! No key may contain another key, and a key that an input can share with a broader topic must be
//! declared first: "время глагола" contains both "время" and "глагол", the earlier "время" wins.

use crate::topic::Topic;

pub(crate) fn grade_three_topics() -> Vec<Topic> {
    vec![
        // Орфография
        Topic::new(
            "жи ши",
            "✏️ Жи-ши",
            "Сочетания ЖИ и ШИ пишутся с буквой И.\n\
             Звуки [ж] и [ш] всегда твёрдые, поэтому слышится [ы], а писать нужно И.",
            [
                "жираф, лыжи, ужин",
                "машина (не машына)",
                "пишите (не пышите)",
            ],
        ),
        Topic::new(
            "ча ща",
            "✏️ Ча-ща",
            "Сочетания ЧА и ЩА пишутся с буквой А.",
            ["чашка, туча, дача", "роща (не рощя)", "площадь (не площядь)"],
        ),
        Topic::new(
            "чу щу",
            "✏️ Чу-щу",
            "Сочетания ЧУ и ЩУ пишутся с буквой У.",
            ["чудо, чугун, щука", "ищу (не ищю)", "чулок (не чюлок)"],
        ),
        Topic::new(
            "чк чн щн",
            "✏️ Сочетания ЧК, ЧН, ЩН",
            "Сочетания ЧК, ЧН, ЩН пишутся без мягкого знака.",
            ["дочка, ночной", "точка (не точька)", "мощный (не мощьный)"],
        ),
        Topic::new(
            "безударные гласные",
            "✏️ Безударные гласные в корне",
            "Безударную гласную в корне проверяй ударением.\n\
             1) Измени слово или подбери однокоренное.\n\
             2) Поставь гласную под ударение.\n\
             3) Напиши ту же букву, что и в проверочном слове.",
            ["вода — вОды", "лиса — лИсы", "гора — гОры"],
        ),
        Topic::new(
            "парные согласные",
            "✏️ Парные согласные в корне",
            "Парную согласную на конце слова или перед другой согласной проверяй:\n\
             подбери слово, где после согласной стоит гласная.",
            ["дуб — дубы", "сказка — сказочка", "флаг — флаги"],
        ),
        Topic::new(
            "непроизносимые согласные",
            "✏️ Непроизносимые согласные",
            "Согласную, которая не произносится, проверяй однокоренным словом, где она слышна.",
            ["солнце — солнышко", "честный — честь", "звёздный — звезда"],
        ),
        Topic::new(
            "разделительный мягкий знак",
            "✏️ Разделительный мягкий знак",
            "Разделительный Ь пишется в корне и окончании перед буквами Е, Ё, Ю, Я, И.",
            ["вьюга, листья, ручьи", "семья (не семя)"],
        ),
        Topic::new(
            "разделительный твёрдый знак",
            "✏️ Разделительный твёрдый знак",
            "Разделительный Ъ пишется после приставки на согласную перед буквами Е, Ё, Ю, Я.",
            ["подъезд, объявление", "съёмка (не сьёмка)"],
        ),
        // Синтаксис
        Topic::new(
            "предложение и словосочетание",
            "📖 Предложение и словосочетание",
            "Словосочетание — два и более слова, связанных по смыслу.\n\
             Предложение выражает законченную мысль, начинается с заглавной буквы \
             и заканчивается знаком (. ? !).",
            ["Словосочетание: зелёный лист", "Предложение: На дереве зелёный лист."],
        ),
        Topic::new(
            "виды предложений",
            "📖 Виды предложений по цели высказывания",
            "1) Повествовательные — сообщают о чём-то (.)\n\
             2) Вопросительные — содержат вопрос (?)\n\
             3) Побудительные — побуждают к действию (. или !)",
            ["Идёт дождь.", "Ты взял зонт?", "Возьми зонт!"],
        ),
        Topic::new(
            "члены предложения",
            "📖 Главные и второстепенные члены предложения",
            "Главные члены: подлежащее (кто? что?) и сказуемое (что делает?).\n\
             Второстепенные: дополнение, определение, обстоятельство.",
            ["Кошка (подлежащее) спит (сказуемое).", "Рыжая кошка спит на окне."],
        ),
        // Части речи
        Topic::new(
            "существительное",
            "🔤 Имя существительное",
            "Обозначает предмет и отвечает на вопросы кто? что?",
            ["мама, кот, стол, река"],
        ),
        Topic::new(
            "прилагательное",
            "🔤 Имя прилагательное",
            "Обозначает признак предмета и отвечает на вопросы какой? какая? какое? какие?",
            ["красный мяч", "тёплая погода"],
        ),
        Topic::new(
            "время",
            "🏃 Время глагола",
            "Глаголы изменяются по временам:\n\
             1) настоящее — что делает?\n\
             2) прошедшее — что делал?\n\
             3) будущее — что будет делать? что сделает?",
            ["читает, читал, будет читать"],
        ),
        Topic::new(
            "число",
            "🏃 Число глагола",
            "Глаголы изменяются по числам:\n\
             1) единственное — что делает?\n\
             2) множественное — что делают?",
            ["птица поёт — птицы поют"],
        ),
        Topic::new(
            "глагол",
            "🔤 Глагол",
            "Обозначает действие предмета и отвечает на вопросы что делать? что сделать?",
            ["бежать, читать, нарисовать"],
        ),
        Topic::new(
            "местоимение",
            "🔤 Местоимение",
            "Указывает на предметы и признаки, но не называет их.",
            ["я, ты, он, она, мы, вы, они"],
        ),
        // Повторение
        Topic::new(
            "повторение",
            "🔁 Повторение",
            "Закрепи: орфограммы, части речи, разборы.",
            ["Найди в тексте орфограммы и подчеркни главные члены предложения."],
        ),
    ]
}
